//! Seed-file parsing.
//!
//! Format: line 1 is `"<width>:<height>"` (base-10, both at least 3); every
//! following line is `"<x>,<y>"` naming one initially live cell. Any
//! malformed line is fatal - no partially parsed world is ever simulated.

use crate::grid::Coord;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Minimum grid dimension accepted from a seed file
pub const MIN_DIMENSION: usize = 3;

/// A parsed seed: grid dimensions plus the initial live cells.
///
/// Duplicate coordinates are allowed here; [`crate::World::spawn`] ignores
/// repeats, so they cannot double-add to the worklist.
#[derive(Clone, Debug)]
pub struct Seed {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Coord>,
}

impl Seed {
    /// Read and parse a seed file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse seed data from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(ParseError::MissingHeader)??;
        let (width, height) = parse_header(&header)?;

        let mut cells = Vec::new();

        for (index, line) in lines.enumerate() {
            let line = line?;
            // Header is line 1, so the first coordinate line is line 2
            let line_number = index + 2;

            let coord = parse_coordinate(&line, line_number)?;

            if coord.x >= width || coord.y >= height {
                return Err(ParseError::OutOfBounds {
                    line: line_number,
                    x: coord.x,
                    y: coord.y,
                    width,
                    height,
                });
            }

            cells.push(coord);
        }

        Ok(Self { width, height, cells })
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader {
        content: line.to_string(),
    };

    let (width_str, height_str) = line.split_once(':').ok_or_else(invalid)?;
    let width: usize = width_str.trim().parse().map_err(|_| invalid())?;
    let height: usize = height_str.trim().parse().map_err(|_| invalid())?;

    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(ParseError::GridTooSmall { width, height });
    }

    Ok((width, height))
}

fn parse_coordinate(line: &str, line_number: usize) -> Result<Coord, ParseError> {
    let invalid = || ParseError::InvalidCoordinate {
        line: line_number,
        content: line.to_string(),
    };

    let (x_str, y_str) = line.split_once(',').ok_or_else(invalid)?;
    let x: usize = x_str.trim().parse().map_err(|_| invalid())?;
    let y: usize = y_str.trim().parse().map_err(|_| invalid())?;

    Ok(Coord::new(x, y))
}

/// Errors raised while parsing a seed file
#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    MissingHeader,
    InvalidHeader { content: String },
    GridTooSmall { width: usize, height: usize },
    InvalidCoordinate { line: usize, content: String },
    OutOfBounds { line: usize, x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::MissingHeader => write!(f, "seed file is empty, expected \"<width>:<height>\" header"),
            Self::InvalidHeader { content } => {
                write!(f, "invalid header {:?}, expected \"<width>:<height>\"", content)
            }
            Self::GridTooSmall { width, height } => {
                write!(
                    f,
                    "grid {}x{} is too small, both dimensions must be at least {}",
                    width, height, MIN_DIMENSION
                )
            }
            Self::InvalidCoordinate { line, content } => {
                write!(f, "line {}: invalid coordinate {:?}, expected \"<x>,<y>\"", line, content)
            }
            Self::OutOfBounds { line, x, y, width, height } => {
                write!(
                    f,
                    "line {}: cell {}:{} is outside the {}x{} grid",
                    line, x, y, width, height
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<Seed, ParseError> {
        Seed::from_reader(Cursor::new(input))
    }

    #[test]
    fn test_parse_valid_seed() {
        let seed = parse("10:8\n1,2\n3,4\n0,0\n").expect("valid seed");

        assert_eq!(seed.width, 10);
        assert_eq!(seed.height, 8);
        assert_eq!(
            seed.cells,
            vec![Coord::new(1, 2), Coord::new(3, 4), Coord::new(0, 0)]
        );
    }

    #[test]
    fn test_parse_header_only() {
        let seed = parse("5:5\n").expect("empty world is valid");
        assert!(seed.cells.is_empty());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(parse(""), Err(ParseError::MissingHeader)));
    }

    #[test]
    fn test_bad_header_rejected() {
        assert!(matches!(
            parse("10x8\n"),
            Err(ParseError::InvalidHeader { .. })
        ));
        assert!(matches!(
            parse("ten:8\n"),
            Err(ParseError::InvalidHeader { .. })
        ));
        assert!(matches!(
            parse("10:-8\n"),
            Err(ParseError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_small_grid_rejected() {
        assert!(matches!(
            parse("2:10\n"),
            Err(ParseError::GridTooSmall { width: 2, height: 10 })
        ));
        assert!(matches!(
            parse("10:2\n"),
            Err(ParseError::GridTooSmall { .. })
        ));
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let err = parse("5:5\n1,1\nnope\n").unwrap_err();
        match err {
            ParseError::InvalidCoordinate { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let err = parse("5:5\n5,0\n").unwrap_err();
        match err {
            ParseError::OutOfBounds { line, x, y, .. } => {
                assert_eq!(line, 2);
                assert_eq!((x, y), (5, 0));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_duplicates_are_kept_for_spawn_to_ignore() {
        let seed = parse("5:5\n1,1\n1,1\n").expect("duplicates are legal");
        assert_eq!(seed.cells.len(), 2);
    }
}
