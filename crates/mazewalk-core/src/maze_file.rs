//! Plain-text maze descriptions.
//!
//! A maze file looks like this:
//!
//! ```text
//! 5 5
//! 0 0
//! 4 0
//! 1 0 0 0 1
//! 1 1 0 0 1
//! 0 1 0 0 1
//! 0 1 0 1 1
//! 0 1 1 1 0
//! ```
//!
//! The first line holds `<width> <height>`, the second the start `<x> <y>`
//! and the third the finish `<x> <y>`, all zero-indexed. Exactly `height`
//! rows of `width` whitespace-separated codes follow, where `0` is a wall and
//! `1` is open floor. Start and finish are marked on the grid after parsing,
//! whatever code their cells carry. Trailing blank lines are allowed.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{CellState, Grid, GridError, Position};

/// Why a maze description could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MalformedReason {
    /// The input ended before a required line.
    #[display("missing {_0} line")]
    MissingLine(&'static str),
    /// A line holds the wrong number of tokens.
    #[display("expected {expected} values, found {found}")]
    WrongTokenCount {
        /// Number of tokens the line must hold.
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
    },
    /// A header token is not a non-negative integer.
    #[display("`{_0}` is not a non-negative integer")]
    InvalidInteger(String),
    /// A row token is not a valid cell code.
    #[display("`{_0}` is not a cell code (expected 0 or 1)")]
    InvalidCell(String),
    /// Non-blank content follows the last maze row.
    #[display("unexpected content after the last maze row")]
    TrailingContent,
}

/// Errors that can occur while loading a maze description.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The text does not follow the maze format.
    #[display("malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },
    /// The header values do not describe a valid grid.
    #[display("invalid maze: {_0}")]
    Grid(#[from] GridError),
    /// A parse failure, attributed to the file it came from.
    #[display("{}: {source}", path.display())]
    InFile {
        /// The offending file.
        path: PathBuf,
        /// The parse failure.
        source: Box<LoadError>,
    },
}

impl LoadError {
    /// Returns `true` if the input text itself was malformed.
    ///
    /// Errors wrapped in [`LoadError::InFile`] are inspected through the wrapper.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::Malformed { .. } => true,
            Self::InFile { source, .. } => source.is_malformed(),
            Self::Io { .. } | Self::Grid(_) => false,
        }
    }
}

/// Parses a maze description.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] if the text does not follow the format,
/// or [`LoadError::Grid`] if the header describes an impossible grid (zero
/// dimensions, or start/finish outside it).
///
/// # Examples
///
/// ```
/// use mazewalk_core::{CellState, Position, maze_file};
///
/// let grid = maze_file::parse("2 1\n0 0\n1 0\n1 1\n")?;
/// assert_eq!(grid.state_at(Position::new(1, 0))?, CellState::Finish);
///
/// let err = maze_file::parse("2 1\n0 0\n1 0\n1\n").unwrap_err();
/// assert!(err.is_malformed());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(input: &str) -> Result<Grid, LoadError> {
    let mut reader = LineReader::new(input);

    let (width, height) = reader.pair("dimensions")?;
    let start = Position::from(reader.pair("start")?);
    let finish = Position::from(reader.pair("finish")?);

    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions {
            width,
            height,
            cells: 0,
        }
        .into());
    }

    let mut cells = Vec::new();
    for _ in 0..height {
        let (line, tokens) = reader.tokens("maze row")?;
        check_token_count(line, width, tokens.len())?;
        for token in tokens {
            let state = token
                .parse::<u8>()
                .ok()
                .and_then(CellState::from_code)
                .ok_or_else(|| LoadError::Malformed {
                    line,
                    reason: MalformedReason::InvalidCell(token.to_owned()),
                })?;
            cells.push(state);
        }
    }
    reader.finish()?;

    let grid = Grid::new(cells, width, height, start, finish)?;
    Ok(grid)
}

/// Reads and parses a maze file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and otherwise wraps
/// any [`parse`] failure in [`LoadError::InFile`] so the path is reported.
pub fn load<P>(path: P) -> Result<Grid, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let grid = parse(&input).map_err(|source| LoadError::InFile {
        path: path.to_owned(),
        source: Box::new(source),
    })?;
    log::debug!(
        "loaded {}x{} maze from {}: start={}, finish={}",
        grid.width(),
        grid.height(),
        path.display(),
        grid.start(),
        grid.finish()
    );
    Ok(grid)
}

impl FromStr for Grid {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn tokens(&mut self, what: &'static str) -> Result<(usize, Vec<&'a str>), LoadError> {
        self.line += 1;
        let text = self.lines.next().ok_or(LoadError::Malformed {
            line: self.line,
            reason: MalformedReason::MissingLine(what),
        })?;
        Ok((self.line, text.split_ascii_whitespace().collect()))
    }

    fn pair(&mut self, what: &'static str) -> Result<(usize, usize), LoadError> {
        let (line, tokens) = self.tokens(what)?;
        check_token_count(line, 2, tokens.len())?;
        let number = |token: &str| {
            token.parse::<usize>().map_err(|_| LoadError::Malformed {
                line,
                reason: MalformedReason::InvalidInteger(token.to_owned()),
            })
        };
        Ok((number(tokens[0])?, number(tokens[1])?))
    }

    fn finish(mut self) -> Result<(), LoadError> {
        for text in self.lines {
            self.line += 1;
            if !text.trim().is_empty() {
                return Err(LoadError::Malformed {
                    line: self.line,
                    reason: MalformedReason::TrailingContent,
                });
            }
        }
        Ok(())
    }
}

fn check_token_count(line: usize, expected: usize, found: usize) -> Result<(), LoadError> {
    if expected == found {
        Ok(())
    } else {
        Err(LoadError::Malformed {
            line,
            reason: MalformedReason::WrongTokenCount { expected, found },
        })
    }
}
