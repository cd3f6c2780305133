use maze_core::{Coordinate, Maze};
use serde::{Deserialize, Serialize};

/// Environment variable read by [`SolveOptions::from_env`]
pub const PARSE_MODE_ENV: &str = "MAZE_PARSE_MODE";

/// How maze text is turned into a grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Never fails: unknown characters are walls, missing markers are
    /// absent, the last duplicate marker wins
    Lenient,
    /// Same grammar, but exactly one start and one exit are required
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Lenient
    }
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(format!("Invalid parse mode: '{}'. Must be 'lenient' or 'strict'", s)),
        }
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMode::Lenient => write!(f, "lenient"),
            ParseMode::Strict => write!(f, "strict"),
        }
    }
}

/// Options for [`solve_maze`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveOptions {
    pub parse_mode: ParseMode,
}

impl SolveOptions {
    /// Read options from the process environment (`MAZE_PARSE_MODE`).
    ///
    /// Unset means defaults; a set but unrecognised value is an error.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SolveOptions::from_env`], with the variable lookup supplied
    /// by the caller.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_mode = match lookup(PARSE_MODE_ENV) {
            Some(value) => value.parse()?,
            None => ParseMode::default(),
        };

        Ok(Self { parse_mode })
    }
}

/// Result of solving one maze, ready to serialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MazeSolution {
    pub width: usize,
    pub height: usize,

    /// `None` when the text had no start marker (lenient mode only)
    pub start: Option<Coordinate>,

    /// `None` when the text had no exit marker (lenient mode only)
    pub exit: Option<Coordinate>,

    /// Minimum number of steps from start to exit, `None` if unreachable
    pub distance: Option<usize>,

    /// One shortest path, exit first and start last; empty if unreachable
    pub path: Vec<Coordinate>,
}

impl MazeSolution {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// The path in walking order, start first
    pub fn path_from_start(&self) -> Vec<Coordinate> {
        self.path.iter().rev().copied().collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parse, solve and reconstruct a path for one maze text.
///
/// # Arguments
/// * `text` - Maze rows separated by line breaks (`D` start, `S` exit,
///   `.` open, anything else wall)
/// * `options` - Parsing behaviour
///
/// # Returns
/// * `Ok(MazeSolution)` - Also when the exit is unreachable; check
///   [`MazeSolution::is_reachable`]
/// * `Err` - Only in strict mode, when a marker is missing or duplicated
///
/// # Example
/// ```
/// use host::{solve_maze, SolveOptions};
///
/// let solution = solve_maze("D.S", &SolveOptions::default()).unwrap();
/// assert_eq!(solution.distance, Some(2));
/// ```
pub fn solve_maze(
    text: &str,
    options: &SolveOptions,
) -> Result<MazeSolution, Box<dyn std::error::Error>> {
    let mut maze = match options.parse_mode {
        ParseMode::Lenient => Maze::new(text),
        ParseMode::Strict => text.parse::<Maze>().map_err(|e| {
            tracing::error!("Rejected maze text: {}", e);
            e
        })?,
    };

    tracing::info!(
        "Solving {}x{} maze ({} parsing)",
        maze.width(),
        maze.height(),
        options.parse_mode
    );

    let distance = maze.solve();
    let path = maze.shortest_path();

    match distance {
        Some(steps) => tracing::info!("Exit reached in {} steps", steps),
        None => tracing::info!("Exit is unreachable"),
    }

    Ok(MazeSolution {
        width: maze.width(),
        height: maze.height(),
        start: maze.start(),
        exit: maze.exit(),
        distance,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("strict".parse::<ParseMode>(), Ok(ParseMode::Strict));
        assert_eq!(" Lenient ".parse::<ParseMode>(), Ok(ParseMode::Lenient));
        assert!("loose".parse::<ParseMode>().is_err());
    }

    #[test]
    fn test_parse_mode_display_round_trips() {
        for mode in [ParseMode::Lenient, ParseMode::Strict] {
            assert_eq!(mode.to_string().parse::<ParseMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_options_from_lookup() {
        let unset = SolveOptions::from_lookup(|_| None).unwrap();
        assert_eq!(unset, SolveOptions::default());

        let strict = SolveOptions::from_lookup(|key| {
            (key == PARSE_MODE_ENV).then(|| "strict".to_string())
        })
        .unwrap();
        assert_eq!(strict.parse_mode, ParseMode::Strict);

        assert!(SolveOptions::from_lookup(|_| Some("maybe".to_string())).is_err());
    }

    #[test]
    fn test_path_from_start() {
        let solution = solve_maze("D.S", &SolveOptions::default()).unwrap();

        assert_eq!(
            solution.path_from_start(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0)
            ]
        );
    }
}
