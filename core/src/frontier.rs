//! FIFO queue of cells discovered but not yet expanded

use std::collections::VecDeque;

use crate::grid::{Coordinate, Grid};

/// A cell waiting to be expanded, with the distance it will be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontierEntry {
    pub at: Coordinate,
    pub distance: usize,
}

impl FrontierEntry {
    pub const fn new(at: Coordinate, distance: usize) -> Self {
        Self { at, distance }
    }
}

/// FIFO frontier with an "already queued" mask.
///
/// FIFO order alone gives correct BFS distances: every entry at distance
/// `d` is pushed before any entry at `d + 1`. The mask keeps each cell in
/// the queue at most once over the lifetime of a traversal.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    queued: Vec<bool>,
    width: usize,
    height: usize,
}

impl Frontier {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: vec![false; grid.cell_count()],
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Append `entry` unless its cell was queued before (or lies outside
    /// the grid). Returns whether the entry was added.
    pub fn push(&mut self, entry: FrontierEntry) -> bool {
        let Some(ind) = self.index_of(entry.at) else {
            return false;
        };
        if self.queued[ind] {
            return false;
        }

        self.queued[ind] = true;
        self.queue.push_back(entry);
        true
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pending entries, head first
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> + '_ {
        self.queue.iter()
    }

    /// Drop all pending entries and forget which cells were queued.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queued.iter_mut().for_each(|flag| *flag = false);
    }

    fn index_of(&self, at: Coordinate) -> Option<usize> {
        if at.x < self.width && at.y < self.height {
            Some(at.y * self.width + at.x)
        } else {
            None
        }
    }
}
