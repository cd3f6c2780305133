//! Breadth-first search over a [`Grid`] and shortest-path reconstruction
//!
//! The grid is read-only input; everything the search mutates lives in a
//! [`Traversal`]:
//! 1. Pop the head of the frontier
//! 2. If it is the exit, record its distance and stop
//! 3. Skip it if it already has a distance
//! 4. Record its distance and queue its unvisited open neighbors at `d + 1`
//!
//! Reconstruction then walks back from the exit, each step moving to the
//! first neighbor (in [`Direction::SCAN_ORDER`](crate::Direction::SCAN_ORDER))
//! whose distance is exactly one less.

use crate::distance::DistanceField;
use crate::frontier::{Frontier, FrontierEntry};
use crate::grid::{Coordinate, Grid};

/// Mutable search state for one grid: distances plus pending frontier.
#[derive(Debug, Clone)]
pub struct Traversal {
    distances: DistanceField,
    frontier: Frontier,
}

impl Traversal {
    /// Fresh state for `grid`, with the frontier seeded at the start (if any)
    pub fn new(grid: &Grid) -> Self {
        let mut traversal = Self {
            distances: DistanceField::for_grid(grid),
            frontier: Frontier::for_grid(grid),
        };
        traversal.seed(grid);
        traversal
    }

    /// Discard all progress and re-seed the frontier.
    pub fn reset(&mut self, grid: &Grid) {
        self.distances.clear();
        self.frontier.clear();
        self.seed(grid);
    }

    fn seed(&mut self, grid: &Grid) {
        if let Some(start) = grid.start() {
            self.frontier.push(FrontierEntry::new(start, 0));
        }
    }

    pub fn distances(&self) -> &DistanceField {
        &self.distances
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Expand one frontier entry. Returns `true` only when the popped entry
    /// is the exit.
    pub fn step(&mut self, grid: &Grid) -> bool {
        let Some(FrontierEntry { at, distance }) = self.frontier.pop() else {
            return false;
        };

        tracing::trace!("Expanding {} at distance {}", at, distance);

        if Some(at) == grid.exit() {
            self.distances.set(at, distance);
            tracing::debug!("Reached exit {} at distance {}", at, distance);
            return true;
        }

        if self.distances.is_visited(at) {
            return false;
        }

        self.distances.set(at, distance);

        for next in neighbors(grid, at) {
            if !self.distances.is_visited(next) {
                self.frontier.push(FrontierEntry::new(next, distance + 1));
            }
        }

        false
    }

    /// Step until the exit is reached or the frontier runs dry.
    ///
    /// Returns the exit's distance, or `None` when it is unreachable or the
    /// grid lacks a start or exit. Calling it again after success returns
    /// the recorded distance without further work.
    pub fn run(&mut self, grid: &Grid) -> Option<usize> {
        let (Some(_), Some(exit)) = (grid.start(), grid.exit()) else {
            return None;
        };

        if let Some(distance) = self.distances.get(exit) {
            return Some(distance);
        }

        while !self.frontier.is_empty() {
            if self.step(grid) {
                return self.distances.get(exit);
            }
        }

        tracing::debug!(
            "Frontier exhausted after visiting {} cells; exit {} unreachable",
            self.distances.visited_count(),
            exit
        );
        None
    }

    /// Walk back from the exit over the recorded distances.
    ///
    /// Returns exit-to-start inclusive, or an empty path when the exit has
    /// no recorded distance. If the field is inconsistent (no neighbor one
    /// step closer) the walk stops early and the partial path is returned.
    pub fn reconstruct(&self, grid: &Grid) -> Vec<Coordinate> {
        let (Some(start), Some(exit)) = (grid.start(), grid.exit()) else {
            return Vec::new();
        };
        let Some(mut remaining) = self.distances.get(exit) else {
            return Vec::new();
        };

        let mut path = vec![exit];
        let mut current = exit;

        // Distances strictly decrease along the walk, so no cell repeats and
        // the loop returns before the cap runs out.
        for _ in 0..grid.cell_count() {
            if current == start {
                return path;
            }

            let Some(previous) = remaining.checked_sub(1).and_then(|wanted| {
                grid.open_neighbors(current)
                    .find(|next| self.distances.get(*next) == Some(wanted))
            }) else {
                tracing::warn!(
                    "No neighbor of {} at distance {:?}; returning partial path of {} cells",
                    current,
                    remaining.checked_sub(1),
                    path.len()
                );
                return path;
            };

            path.push(previous);
            current = previous;
            remaining -= 1;
        }

        path
    }
}

/// Open, in-bounds neighbors of `at` that are not the start, in scan order.
///
/// The start is never re-entered by the search, so it is left out here.
pub fn neighbors(grid: &Grid, at: Coordinate) -> Vec<Coordinate> {
    let start = grid.start();
    grid.open_neighbors(at)
        .filter(|next| Some(*next) != start)
        .collect()
}
