//! Simulation error type

use thiserror::Error;

/// Failures reported at construction, parsing, and registration time.
///
/// Boundary and collision stops are simulation outcomes, not errors;
/// they surface through car state and collision records instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("field dimensions must be positive, got {width} x {height}")]
    InvalidFieldDimension { width: i32, height: i32 },

    #[error("a car named {0} is already registered")]
    DuplicateCarName(String),

    #[error("unrecognized command symbol '{0}'")]
    InvalidCommandSymbol(char),

    #[error("unrecognized heading symbol '{0}'")]
    InvalidHeadingSymbol(char),
}
