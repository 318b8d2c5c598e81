use std::io;

use thiserror::Error;

/// Errors raised by the simulation core and its output sinks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid coordinates ({x}, {y}): both must be non-negative")]
    InvalidCoordinate { x: i64, y: i64 },
    #[error("invalid dimensions ({width}, {height}): both must be positive")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("no cell with identifier {0:?}")]
    UnknownIdentity(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to paint generation")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
