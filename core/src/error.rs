use std::{error, fmt::Display};

use crate::grid::Coordinate;

/// Why strict parsing rejected a maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    MissingStart,
    MissingExit,
    DuplicateStart(Coordinate, Coordinate),
    DuplicateExit(Coordinate, Coordinate),
}

impl Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::MissingStart => write!(f, "No start position (D) in maze."),
            MazeError::MissingExit => write!(f, "No exit position (S) in maze."),
            MazeError::DuplicateStart(first, second) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                first, second
            ),
            MazeError::DuplicateExit(first, second) => write!(
                f,
                "Expect only one exit position, given two({}, {}).",
                first, second
            ),
        }
    }
}

impl error::Error for MazeError {}
