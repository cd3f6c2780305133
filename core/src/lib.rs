//! Grid maze shortest-path solver
//!
//! This crate parses a character map into a wall grid, finds the minimum
//! number of steps from the start (`D`) to the exit (`S`) with a
//! breadth-first search, and reconstructs one shortest path.
//!
//! The crate does no I/O. It logs through `tracing`; installing a
//! subscriber is up to the caller.

pub mod distance;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod maze;
pub mod traversal;

// Re-export commonly used types for convenience
pub use distance::DistanceField;
pub use error::MazeError;
pub use frontier::{Frontier, FrontierEntry};
pub use grid::{Coordinate, Direction, Grid};
pub use maze::Maze;
pub use traversal::Traversal;
