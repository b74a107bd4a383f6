//! Map parsing functionality for converting octile map text into structured data.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::ParseError;

/// Character written for traversable tiles. Also the only character parsed as traversable.
pub const TRAVERSABLE: char = '.';
/// Character written for obstacle tiles. Any non-`.` character parses as an obstacle.
pub const OBSTACLE: char = '@';

/// Dimensions declared by an octile map header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctileHeader {
    pub width: u32,
    pub height: u32,
}

impl OctileHeader {
    /// Number of cells the body must provide. Saturates where `usize` is narrower than 64 bits.
    pub const fn num_tiles(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Parser for converting octile map text into a header and a row-major traversability buffer.
pub struct OctileParser;

impl OctileParser {
    /// Converts a body character into its traversability.
    pub fn parse_character(c: char) -> bool {
        c == TRAVERSABLE
    }

    /// Parses the four header lines: `type octile`, `height <N>` and `width <N>` in either order, then `map`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` if the first line is not exactly `type octile`,
    /// and `ParseError::MalformedHeader` for any problem with the dimension or `map` lines.
    pub fn parse_header<R: BufRead>(reader: &mut R) -> Result<OctileHeader, ParseError> {
        let mut buf = String::new();

        let line = read_trimmed_line(reader, &mut buf)?.ok_or_else(|| ParseError::UnsupportedFormat(String::new()))?;
        trace!(line, "Read type line");
        let mut tokens = line.split(' ');
        if !matches!((tokens.next(), tokens.next(), tokens.next()), (Some("type"), Some("octile"), None)) {
            return Err(ParseError::UnsupportedFormat(line.to_string()));
        }

        let mut height = None;
        let mut width = None;
        for _ in 0..2 {
            let line = read_trimmed_line(reader, &mut buf)?
                .ok_or_else(|| ParseError::MalformedHeader("unexpected end of input before 'map'".to_string()))?;
            trace!(line, "Read dimension line");

            let mut tokens = line.split(' ');
            let (key, value) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(key), Some(value), None) => (key, value),
                _ => {
                    return Err(ParseError::MalformedHeader(format!(
                        "expected '<height|width> <N>', found '{line}'"
                    )))
                }
            };

            let slot = match key {
                "height" => &mut height,
                "width" => &mut width,
                _ => return Err(ParseError::MalformedHeader(format!("unknown header key '{key}'"))),
            };
            *slot = Some(Self::parse_dimension(key, value)?);
        }

        let height = height.ok_or_else(|| ParseError::MalformedHeader("missing 'height' line".to_string()))?;
        let width = width.ok_or_else(|| ParseError::MalformedHeader("missing 'width' line".to_string()))?;

        match read_trimmed_line(reader, &mut buf)? {
            Some("map") => {}
            Some(line) => return Err(ParseError::MalformedHeader(format!("expected 'map', found '{line}'"))),
            None => return Err(ParseError::MalformedHeader("unexpected end of input before 'map'".to_string())),
        }

        debug!(width, height, "Parsed octile header");
        Ok(OctileHeader { width, height })
    }

    /// Reads exactly `header.num_tiles()` cells, skipping line breaks.
    ///
    /// Input is consumed one line at a time and reading stops at the line holding the last
    /// cell, so nothing after that line is read or decoded. The cell buffer grows with the
    /// input rather than with the declared size.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::TruncatedBody` if the input ends before every cell is read,
    /// or `ParseError::Io` if the reader fails (including invalid UTF-8 within the body).
    pub fn parse_body<R: BufRead>(reader: &mut R, header: &OctileHeader) -> Result<Vec<bool>, ParseError> {
        let expected = header.num_tiles();
        let mut cells = Vec::new();
        let mut line = String::new();

        while cells.len() < expected {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(ParseError::TruncatedBody {
                    expected,
                    found: cells.len(),
                });
            }

            let remaining = expected - cells.len();
            let mut chars = line.chars().filter(|c| !matches!(c, '\n' | '\r'));
            cells.extend(chars.by_ref().take(remaining).map(Self::parse_character));

            let trailing = chars.count();
            if trailing > 0 {
                debug!(trailing, "Ignoring characters after the last map cell");
            }
        }

        Ok(cells)
    }

    fn parse_dimension(key: &str, value: &str) -> Result<u32, ParseError> {
        // Dimensions must fit in i32 so signed query coordinates can reach every tile.
        match value.parse::<i32>() {
            Ok(n) if n > 0 => Ok(n as u32),
            _ => Err(ParseError::MalformedHeader(format!(
                "'{key}' must be a positive integer, found '{value}'"
            ))),
        }
    }
}

/// Reads one line into `buf` and returns it trimmed, or `None` at end of input.
fn read_trimmed_line<'a, R: BufRead>(reader: &mut R, buf: &'a mut String) -> std::io::Result<Option<&'a str>> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(text: &str) -> Result<OctileHeader, ParseError> {
        OctileParser::parse_header(&mut text.as_bytes())
    }

    #[test]
    fn test_parse_character() {
        assert!(OctileParser::parse_character('.'));
        for c in ['@', 'T', 'W', 'S', ' ', 'G'] {
            assert!(!OctileParser::parse_character(c));
        }
    }

    #[test]
    fn test_header_accepts_either_dimension_order() {
        let expected = OctileHeader { width: 3, height: 2 };
        assert_eq!(header("type octile\nheight 2\nwidth 3\nmap\n").unwrap(), expected);
        assert_eq!(header("type octile\nwidth 3\nheight 2\nmap\n").unwrap(), expected);
    }

    #[test]
    fn test_header_tolerates_crlf() {
        let parsed = header("type octile\r\nheight 4\r\nwidth 5\r\nmap\r\n").unwrap();
        assert_eq!(parsed, OctileHeader { width: 5, height: 4 });
        assert_eq!(parsed.num_tiles(), 20);
    }

    #[test]
    fn test_header_requires_both_type_tokens() {
        for text in ["type grid\n", "kind octile\n", "type\n", "type octile extra\n", ""] {
            assert!(matches!(header(text), Err(ParseError::UnsupportedFormat(_))), "{text:?}");
        }
    }

    #[test]
    fn test_header_rejects_bad_dimensions() {
        let cases = [
            "type octile\nheight 2\nheight 3\nmap\n",
            "type octile\nheight 2\ndepth 3\nmap\n",
            "type octile\nheight 2 3\nwidth 3\nmap\n",
            "type octile\nheight two\nwidth 3\nmap\n",
            "type octile\nheight 0\nwidth 3\nmap\n",
            "type octile\nheight -1\nwidth 3\nmap\n",
            "type octile\nheight  2\nwidth 3\nmap\n",
            "type octile\nheight 2\n",
        ];
        for text in cases {
            assert!(matches!(header(text), Err(ParseError::MalformedHeader(_))), "{text:?}");
        }
    }

    #[test]
    fn test_header_requires_map_line() {
        assert!(matches!(
            header("type octile\nheight 2\nwidth 3\nmaps\n"),
            Err(ParseError::MalformedHeader(_))
        ));
        assert!(matches!(
            header("type octile\nheight 2\nwidth 3\n"),
            Err(ParseError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_body_skips_line_breaks() {
        let header = OctileHeader { width: 2, height: 2 };
        let cells = OctileParser::parse_body(&mut ".@\r\n\n@.\n".as_bytes(), &header).unwrap();
        assert_eq!(cells, vec![true, false, false, true]);
    }

    #[test]
    fn test_body_ignores_trailing_characters() {
        let header = OctileHeader { width: 1, height: 1 };
        let cells = OctileParser::parse_body(&mut ".\n@@@\n".as_bytes(), &header).unwrap();
        assert_eq!(cells, vec![true]);
    }

    #[test]
    fn test_body_stops_reading_after_last_cell() {
        let header = OctileHeader { width: 2, height: 1 };
        let mut reader: &[u8] = b".@\n\xFF\xFE not utf-8\n";

        let cells = OctileParser::parse_body(&mut reader, &header).unwrap();
        assert_eq!(cells, vec![true, false]);
        assert_eq!(reader, b"\xFF\xFE not utf-8\n");
    }

    #[test]
    fn test_num_tiles_of_largest_header() {
        let header = OctileHeader {
            width: i32::MAX as u32,
            height: i32::MAX as u32,
        };
        assert!(header.num_tiles() >= i32::MAX as usize);
    }

    #[test]
    fn test_body_truncated() {
        let header = OctileHeader { width: 3, height: 2 };
        let result = OctileParser::parse_body(&mut ".@.\n..\n".as_bytes(), &header);
        assert!(matches!(
            result,
            Err(ParseError::TruncatedBody { expected: 6, found: 5 })
        ));
    }
}
