//! Per-cell BFS distances from the start
//!
//! A cell holds `None` until it has been dequeued and expanded; from then on
//! it holds its true distance. The start is the only cell that can hold
//! `Some(0)`.

use crate::grid::{Coordinate, Grid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    cells: Vec<Option<usize>>,
    width: usize,
    height: usize,
}

impl DistanceField {
    /// An all-unvisited field with the grid's dimensions
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![None; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Recorded distance at `at`; `None` if unvisited or out of bounds.
    pub fn get(&self, at: Coordinate) -> Option<usize> {
        self.index_of(at).and_then(|ind| self.cells[ind])
    }

    pub fn is_visited(&self, at: Coordinate) -> bool {
        self.get(at).is_some()
    }

    /// Record `distance` at `at`. Writes outside the field are ignored.
    pub fn set(&mut self, at: Coordinate, distance: usize) {
        if let Some(ind) = self.index_of(at) {
            self.cells[ind] = Some(distance);
        }
    }

    /// Number of cells with a recorded distance
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    fn index_of(&self, at: Coordinate) -> Option<usize> {
        if at.x < self.width && at.y < self.height {
            Some(at.y * self.width + at.x)
        } else {
            None
        }
    }
}
