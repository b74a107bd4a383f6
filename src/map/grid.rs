//! The in-memory traversability grid and its load/query/write operations.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use glam::IVec2;
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::error::{MapError, ParseError};
use crate::map::action::Action;
use crate::map::direction::Direction;
use crate::map::parser::{OctileParser, OBSTACLE, TRAVERSABLE};

/// A 2D occupancy grid stored as one contiguous row-major buffer.
///
/// A freshly constructed map is empty (`0 x 0`). Loading replaces its dimensions and cells
/// in one step; a failed load leaves the previous contents untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridMap {
    width: u32,
    height: u32,
    /// `true` = traversable, indexed by `y * width + x`
    cells: Vec<bool>,
}

impl GridMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete octile map from `reader`.
    ///
    /// # Errors
    ///
    /// Returns the first header or body problem found, or `ParseError::Io` if reading fails.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, ParseError> {
        let header = OctileParser::parse_header(&mut reader)?;
        let cells = OctileParser::parse_body(&mut reader, &header)?;

        Ok(Self {
            width: header.width,
            height: header.height,
            cells,
        })
    }

    /// Replaces this map with the one read from `reader`.
    ///
    /// On error the map keeps its previous contents.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<(), ParseError> {
        *self = Self::parse(reader)?;
        debug!(width = self.width, height = self.height, "Loaded map");
        Ok(())
    }

    /// Opens and parses the map stored at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path.as_ref())?;
        let map = Self::parse(BufReader::new(file))?;
        debug!(
            width = map.width,
            height = map.height,
            traversable = map.num_traversable(),
            "Loaded map file"
        );
        Ok(map)
    }

    /// Renders the map in octile format.
    pub fn write(&self) -> String {
        self.to_string()
    }

    /// Streams the octile text for this map into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The row-major traversability buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Total number of tiles, traversable or not.
    pub fn num_tiles(&self) -> usize {
        self.cells.len()
    }

    pub fn num_traversable(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies inside the map.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Tells whether the tile at `(x, y)` is traversable.
    pub fn get_tile(&self, x: i32, y: i32) -> Result<bool, MapError> {
        self.index(x, y).map(|index| self.cells[index])
    }

    /// Marks the tile at `(x, y)` as traversable or blocked.
    pub fn set_tile(&mut self, x: i32, y: i32, traversable: bool) -> Result<(), MapError> {
        let index = self.index(x, y)?;
        self.cells[index] = traversable;
        Ok(())
    }

    /// Lists the unit-cost moves from `(x, y)` that stay inside the map.
    ///
    /// Moves are reported in the order Up, Down, Right, Left. Tile traversability is not
    /// consulted; combine with [`get_tile`](Self::get_tile) to filter blocked targets.
    pub fn get_moves(&self, x: i32, y: i32) -> Result<SmallVec<[Action; 4]>, MapError> {
        self.index(x, y)?;
        let position = IVec2::new(x, y);

        Ok(Direction::MOVES
            .into_iter()
            .filter(|&direction| {
                let target = position + direction.offset();
                self.contains(target.x, target.y)
            })
            .map(Action::unit)
            .collect())
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, MapError> {
        if !self.contains(x, y) {
            return Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "type octile")?;
        writeln!(f, "height {}", self.height)?;
        writeln!(f, "width {}", self.width)?;
        writeln!(f, "map")?;

        if self.width == 0 {
            return Ok(());
        }

        let mut line = String::with_capacity(self.width as usize);
        for row in self.cells.chunks(self.width as usize) {
            line.clear();
            line.extend(row.iter().map(|&cell| if cell { TRAVERSABLE } else { OBSTACLE }));
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for GridMap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}
