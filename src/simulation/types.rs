//! Core types for the car simulation
//!
//! Standalone value types shared across the simulation modules.

use std::fmt;

use super::error::SimError;

/// A cell position on the simulation field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given heading
    pub fn step(&self, heading: Heading) -> Position {
        let (dx, dy) = heading.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four cardinal headings
///
/// Right turns cycle clockwise through N→E→S→W→N; left turns run the
/// same cycle in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after a 90 degree right turn
    pub fn clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The heading after a 90 degree left turn
    pub fn counter_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The single-cell forward offset for this heading
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Parse a heading from its single-letter form, case-insensitively
    pub fn from_symbol(symbol: char) -> Result<Heading, SimError> {
        match symbol.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(SimError::InvalidHeadingSymbol(symbol)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        };
        write!(f, "{symbol}")
    }
}

/// A single car instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one cell forward in the current heading
    Forward,
    /// Rotate 90 degrees counter-clockwise in place
    Left,
    /// Rotate 90 degrees clockwise in place
    Right,
}

impl Command {
    /// Parse a command from its single-letter form, case-insensitively
    pub fn from_symbol(symbol: char) -> Result<Command, SimError> {
        match symbol.to_ascii_uppercase() {
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            _ => Err(SimError::InvalidCommandSymbol(symbol)),
        }
    }

    /// Parse a whole command string, rejecting the first unknown symbol
    pub fn parse_sequence(input: &str) -> Result<Vec<Command>, SimError> {
        input.chars().map(Command::from_symbol).collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Command::Forward => 'F',
            Command::Left => 'L',
            Command::Right => 'R',
        };
        write!(f, "{symbol}")
    }
}

/// A record of two cars meeting at the same cell during one step
///
/// Every collision produces two mirrored records, one per involved car,
/// with the moving car's record first. `step` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRecord {
    pub name: String,
    pub other_name: String,
    pub position: Position,
    pub step: usize,
}

impl CollisionRecord {
    pub fn new(
        name: impl Into<String>,
        other_name: impl Into<String>,
        position: Position,
        step: usize,
    ) -> Self {
        Self {
            name: name.into(),
            other_name: other_name.into(),
            position,
            step,
        }
    }

    /// The same collision seen from the other car
    pub fn mirrored(&self) -> CollisionRecord {
        CollisionRecord {
            name: self.other_name.clone(),
            other_name: self.name.clone(),
            position: self.position,
            step: self.step,
        }
    }
}
