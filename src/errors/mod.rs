//! Error handling module for the demo backend.
//!
//! Request handling has no failure paths — every view is composed from
//! in-memory fixtures, and unmatched routes degrade to the not-found page.
//! The only real errors are startup errors: bad configuration and socket
//! binding.

use std::fmt;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// A configuration value could not be parsed
    InvalidConfig(String),
    /// Socket bind or serve failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::InvalidConfig(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
