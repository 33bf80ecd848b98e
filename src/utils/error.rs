// Error handling utilities
// Author: Gabriel Demetrios Lafis

use std::fmt;

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::grid::GridError;
use crate::storage::StorageError;

/// Classification shared by grid and dataset errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A grid or row does not have the required rectangular shape
    InvalidInput,
    /// An unsupported axis, angle or transformation was requested
    InvalidArgument,
    /// The document cannot be traversed as a dataset
    MalformedDataset,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::MalformedDataset => write!(f, "malformed dataset"),
        }
    }
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
