//! Grid model: coordinates, directions and the wall mask parsed from text
//!
//! Input grammar, one row per line:
//! - `D` = start (open cell)
//! - `S` = exit (open cell)
//! - `.` = open cell
//! - `#` = wall, and so is any other character
//!
//! Rows shorter than the longest row are padded with walls.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character marking the start cell
pub const START_CHAR: char = 'D';
/// Character marking the exit cell
pub const EXIT_CHAR: char = 'S';
/// Character marking an open cell
pub const OPEN_CHAR: char = '.';
/// Character marking a wall (also used when rendering padded cells)
pub const WALL_CHAR: char = '#';

/// A cell position: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate in `dir`, or `None` when it would leave the
    /// non-negative quadrant. Upper bounds are the grid's business.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
            _ => None,
        }
    }

    /// True when `other` is exactly one step away on exactly one axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four grid moves. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Scan order used by both expansion and reconstruction.
    ///
    /// Reconstruction picks the first matching neighbor in this order, so
    /// changing it changes which shortest path is reported.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Immutable wall mask plus the recorded start and exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    walls: Vec<bool>,
    width: usize,
    height: usize,
    start: Option<Coordinate>,
    exit: Option<Coordinate>,
}

/// Where each marker character was seen during a scan, in row-major order.
#[derive(Debug, Default)]
pub(crate) struct MarkerSightings {
    pub starts: Vec<Coordinate>,
    pub exits: Vec<Coordinate>,
}

impl Grid {
    /// Build a grid from text. Never fails: unknown characters become walls
    /// and a missing marker leaves the corresponding coordinate unset.
    ///
    /// When a marker appears more than once, the last occurrence in
    /// row-major order wins.
    pub fn parse(text: &str) -> Self {
        Self::scan(text).0
    }

    /// Parse and also report every marker position, so strict construction
    /// can reject duplicates without a second pass.
    pub(crate) fn scan(text: &str) -> (Self, MarkerSightings) {
        let lines: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut walls = Vec::with_capacity(width * height);
        let mut sightings = MarkerSightings::default();

        for (y, line) in lines.iter().enumerate() {
            for x in 0..width {
                let cell = line.get(x).copied().unwrap_or(WALL_CHAR);
                walls.push(match cell {
                    START_CHAR => {
                        sightings.starts.push(Coordinate::new(x, y));
                        false
                    }
                    EXIT_CHAR => {
                        sightings.exits.push(Coordinate::new(x, y));
                        false
                    }
                    OPEN_CHAR => false,
                    _ => true,
                });
            }
        }

        let grid = Self {
            walls,
            width,
            height,
            start: sightings.starts.last().copied(),
            exit: sightings.exits.last().copied(),
        };

        tracing::debug!(
            "Parsed {}x{} grid (start: {:?}, exit: {:?})",
            grid.width,
            grid.height,
            grid.start,
            grid.exit
        );
        tracing::trace!("Grid as parsed:\n{}", grid.render());

        (grid, sightings)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, walls included
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    pub fn exit(&self) -> Option<Coordinate> {
        self.exit
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.width && at.y < self.height
    }

    /// Out-of-bounds coordinates count as walls.
    pub fn is_wall(&self, at: Coordinate) -> bool {
        self.index_of(at).map_or(true, |ind| self.walls[ind])
    }

    pub fn is_open(&self, at: Coordinate) -> bool {
        !self.is_wall(at)
    }

    /// Row-major index of `at`, if inside the grid.
    pub(crate) fn index_of(&self, at: Coordinate) -> Option<usize> {
        if self.contains(at) {
            Some(at.y * self.width + at.x)
        } else {
            None
        }
    }

    /// In-bounds, open neighbors of `at` in [`Direction::SCAN_ORDER`].
    ///
    /// This is the bounds/wall check shared by expansion and path
    /// reconstruction; it does not exclude the start.
    pub fn open_neighbors(&self, at: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::SCAN_ORDER
            .into_iter()
            .filter_map(move |dir| at.neighbor(dir))
            .filter(move |next| self.is_open(*next))
    }

    /// Render the grid back to text: one line per row, padded cells shown
    /// as walls, markers at their recorded positions.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let at = Coordinate::new(x, y);
                let c = if Some(at) == self.start {
                    START_CHAR
                } else if Some(at) == self.exit {
                    EXIT_CHAR
                } else if self.is_wall(at) {
                    WALL_CHAR
                } else {
                    OPEN_CHAR
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: &[&str]) -> Grid {
        Grid::parse(&rows.join("\n"))
    }

    #[test]
    fn test_parses_start_exit_and_walls() {
        let grid = grid_of(&["D..#.", "##...", ".#.#.", "..#..", "####S"]);

        assert_eq!(grid.start(), Some(Coordinate::new(0, 0)));
        assert_eq!(grid.exit(), Some(Coordinate::new(4, 4)));
        assert!(grid.is_wall(Coordinate::new(3, 0)));
        assert!(grid.is_wall(Coordinate::new(0, 1)));
        assert!(grid.is_open(Coordinate::new(1, 0)));
        assert!(grid.is_open(Coordinate::new(4, 4)));
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn test_ragged_rows_are_padded_with_walls() {
        let grid = grid_of(&["D....", ".", "...S"]);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_open(Coordinate::new(0, 1)));
        assert!(grid.is_wall(Coordinate::new(1, 1)));
        assert!(grid.is_wall(Coordinate::new(4, 2)));
    }

    #[test]
    fn test_unknown_characters_are_walls() {
        let grid = Grid::parse("D?x S");

        assert!(grid.is_wall(Coordinate::new(1, 0)));
        assert!(grid.is_wall(Coordinate::new(2, 0)));
        assert!(grid.is_wall(Coordinate::new(3, 0)));
        assert!(grid.is_open(Coordinate::new(4, 0)));
    }

    #[test]
    fn test_crlf_and_empty_lines_are_skipped() {
        let grid = Grid::parse("D.\r\n\r\n.S\r\n\r\n");

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.exit(), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_missing_markers_are_none() {
        let grid = Grid::parse("...\n.#.");

        assert_eq!(grid.start(), None);
        assert_eq!(grid.exit(), None);
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::parse("");

        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.cell_count(), 0);
        assert!(grid.is_wall(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_last_marker_occurrence_wins() {
        let grid = grid_of(&["D.S", "S.D"]);

        assert_eq!(grid.start(), Some(Coordinate::new(2, 1)));
        assert_eq!(grid.exit(), Some(Coordinate::new(0, 1)));
        // Earlier markers stay open cells
        assert!(grid.is_open(Coordinate::new(0, 0)));
        assert!(grid.is_open(Coordinate::new(2, 0)));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = Grid::parse("D.S");

        assert!(!grid.contains(Coordinate::new(3, 0)));
        assert!(grid.is_wall(Coordinate::new(3, 0)));
        assert!(grid.is_wall(Coordinate::new(0, 1)));
    }

    #[test]
    fn test_open_neighbors_scan_order() {
        let grid = grid_of(&["...", "...", "..."]);
        let neighbors: Vec<_> = grid.open_neighbors(Coordinate::new(1, 1)).collect();

        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_open_neighbors_at_corner() {
        let grid = grid_of(&[".#", ".."]);
        let neighbors: Vec<_> = grid.open_neighbors(Coordinate::new(0, 0)).collect();

        assert_eq!(neighbors, vec![Coordinate::new(0, 1)]);
    }

    #[test]
    fn test_neighbor_underflow() {
        let origin = Coordinate::new(0, 0);

        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Down), Some(Coordinate::new(0, 1)));
        assert_eq!(origin.neighbor(Direction::Right), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_is_adjacent() {
        let c = Coordinate::new(2, 2);

        assert!(c.is_adjacent(&Coordinate::new(2, 1)));
        assert!(c.is_adjacent(&Coordinate::new(3, 2)));
        assert!(!c.is_adjacent(&Coordinate::new(3, 3)));
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn test_render_pads_short_rows() {
        let grid = grid_of(&["D.x", ".", "..S"]);

        assert_eq!(grid.render(), "D.#\n.##\n..S\n");
    }
}
