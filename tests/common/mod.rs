#![allow(dead_code)]

use octile::GridMap;

/// The 3x2 map used throughout the documentation.
pub const SMALL_MAP: &str = "type octile\nheight 2\nwidth 3\nmap\n.@.\n..@\n";

/// A 5x4 map mixing the obstacle characters found in benchmark sets.
pub const MIXED_MAP: &str = "\
type octile
width 5
height 4
map
..T..
.@@W.
S....
..G.@
";

pub fn small_map() -> GridMap {
    SMALL_MAP.parse().expect("fixture map should parse")
}

pub fn mixed_map() -> GridMap {
    MIXED_MAP.parse().expect("fixture map should parse")
}

/// Builds an all-open map of the given size.
pub fn open_map(width: u32, height: u32) -> GridMap {
    let row = ".".repeat(width as usize);
    let body = vec![row; height as usize].join("\n");
    format!("type octile\nheight {height}\nwidth {width}\nmap\n{body}\n")
        .parse()
        .expect("generated map should parse")
}
