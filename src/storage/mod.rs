// Storage module for reading and writing dataset files
// Author: Gabriel Demetrios Lafis

mod json;

pub use json::*;

use thiserror::Error;

use crate::dataset::{Dataset, DatasetError};

/// Represents a source of datasets
pub trait DataSource {
    /// Read the dataset from the source
    fn read(&self) -> Result<Dataset, StorageError>;

    /// Get the source name
    fn name(&self) -> &str;
}

/// Represents a destination for datasets
pub trait DataSink {
    /// Write the dataset to the sink
    fn write(&self, data: &Dataset) -> Result<(), StorageError>;

    /// Get the sink name
    fn name(&self) -> &str;
}

/// Represents an error in the storage module
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Dataset error in '{path}': {source}")]
    Dataset {
        path: String,
        source: DatasetError,
    },
}
