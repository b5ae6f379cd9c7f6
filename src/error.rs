//! Error type shared by every solver in the crate.

use thiserror::Error;

/// Errors raised when a solve cannot proceed.
///
/// Every variant is a precondition failure: the computations themselves are
/// deterministic and never fail once their inputs are accepted.
#[derive(Debug, Error)]
pub enum TspError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("instance has no points")]
    EmptyInstance,
    #[error("instance has {nodes} points, exact solver accepts at most {max}")]
    TooManyNodes { nodes: usize, max: usize },
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}
