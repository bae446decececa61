// this module is transparently re-exported by its parent `parser`
use std::fmt;

/// A location in a parsed document, which can be unknown or a specific point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Location {
    /// No information is available
    Unknown,
    /// A single position
    Pos(Position),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => write!(f, "?"),
            Location::Pos(pos) => write!(f, "{}", pos),
        }
    }
}

impl Location {
    /// Build a location which is a byte-offset (starting at 0) in the document.
    pub fn from_offset(offset: usize) -> Location {
        Location::Pos(Position::Offset(offset))
    }
    /// Build a location which is a line-column position (both starting at 1) in the document.
    pub fn from_lico(line: usize, column: usize) -> Location {
        Location::Pos(Position::LiCo(line, column))
    }
}

/// A position in a parsed document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    /// Byte offset (starting at 0)
    Offset(usize),
    /// Line-Column position (both starting at 1)
    LiCo(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Offset(offset) => write!(f, "byte {}", offset),
            Position::LiCo(li, co) => write!(f, "{}:{}", li, co),
        }
    }
}
