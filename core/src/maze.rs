//! The solver entry point: a parsed grid plus its search state
//!
//! ```
//! use maze_core::{Coordinate, Maze};
//!
//! let mut maze = Maze::new("D.S");
//! assert_eq!(maze.solve(), Some(2));
//! assert_eq!(
//!     maze.shortest_path(),
//!     vec![Coordinate::new(2, 0), Coordinate::new(1, 0), Coordinate::new(0, 0)]
//! );
//! ```

use std::str::FromStr;

use crate::distance::DistanceField;
use crate::error::MazeError;
use crate::frontier::Frontier;
use crate::grid::{Coordinate, Grid};
use crate::traversal::{self, Traversal};

/// A maze owns its read-only [`Grid`] and the [`Traversal`] state that the
/// search mutates. One solve per instance; mutation needs `&mut self`.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    traversal: Traversal,
}

impl Maze {
    /// Parse `text` leniently. Never fails: unknown characters are walls,
    /// a missing marker leaves `start()`/`exit()` as `None`, and duplicate
    /// markers resolve to their last occurrence.
    ///
    /// Use `text.parse::<Maze>()` to reject missing or duplicate markers.
    pub fn new(text: &str) -> Self {
        Self::from_grid(Grid::parse(text))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let traversal = Traversal::new(&grid);
        Self { grid, traversal }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.grid.start()
    }

    pub fn exit(&self) -> Option<Coordinate> {
        self.grid.exit()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn distances(&self) -> &DistanceField {
        self.traversal.distances()
    }

    pub fn frontier(&self) -> &Frontier {
        self.traversal.frontier()
    }

    /// Recorded BFS distance of a cell, once it has been expanded
    pub fn distance_at(&self, at: Coordinate) -> Option<usize> {
        self.traversal.distances().get(at)
    }

    /// Advance the search by one frontier entry.
    ///
    /// Returns `true` only on the step that dequeues the exit; an empty
    /// frontier yields `false` and changes nothing.
    pub fn step(&mut self) -> bool {
        self.traversal.step(&self.grid)
    }

    /// Run the search to completion and return the exit's distance.
    ///
    /// `None` when the exit is unreachable or a marker is missing. Repeated
    /// calls return the same answer.
    pub fn solve(&mut self) -> Option<usize> {
        self.traversal.run(&self.grid)
    }

    /// One shortest path, exit first and start last.
    ///
    /// Solves first if needed. Empty when there is no path. Among equally
    /// short paths, the one found by preferring up, down, left, right (in
    /// that order) while walking back from the exit is returned.
    pub fn shortest_path(&mut self) -> Vec<Coordinate> {
        let Some(exit) = self.grid.exit() else {
            return Vec::new();
        };

        if self.distance_at(exit).is_none() && self.solve().is_none() {
            return Vec::new();
        }

        self.traversal.reconstruct(&self.grid)
    }

    /// Same path as [`Maze::shortest_path`], start first.
    pub fn shortest_path_from_start(&mut self) -> Vec<Coordinate> {
        let mut path = self.shortest_path();
        path.reverse();
        path
    }

    /// In-bounds, open, non-start neighbors of `at` (up, down, left, right).
    pub fn neighbors(&self, at: Coordinate) -> Vec<Coordinate> {
        traversal::neighbors(&self.grid, at)
    }

    /// Forget all search progress so the maze can be solved again.
    pub fn reset(&mut self) {
        self.traversal.reset(&self.grid);
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Strict parse: same grammar as [`Maze::new`], but exactly one start
    /// and one exit are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (grid, sightings) = Grid::scan(s);

        match sightings.starts.as_slice() {
            [] => return Err(MazeError::MissingStart),
            [first, second, ..] => return Err(MazeError::DuplicateStart(*first, *second)),
            [_] => {}
        }
        match sightings.exits.as_slice() {
            [] => return Err(MazeError::MissingExit),
            [first, second, ..] => return Err(MazeError::DuplicateExit(*first, *second)),
            [_] => {}
        }

        Ok(Self::from_grid(grid))
    }
}
