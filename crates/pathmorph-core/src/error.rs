//! Error types for path morphing

use thiserror::Error;

/// The error type for path parsing and interpolator construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorphError {
    #[error("empty command token")]
    EmptyToken,

    #[error("unrecognized command type: {0:?}")]
    UnrecognizedCommand(char),

    #[error("wrong argument count for command {command}: expected {expected}, got {got}")]
    WrongArgumentCount {
        command: char,
        expected: usize,
        got: usize,
    },

    #[error("invalid number {argument:?} in command {command}")]
    InvalidNumber { command: char, argument: String },
}

/// Result type alias for path morphing operations
pub type Result<T> = std::result::Result<T, MorphError>;
