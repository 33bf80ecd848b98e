// JSON dataset source and sink implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::trace;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::{DataSink, DataSource, StorageError};
use crate::dataset::Dataset;

/// Default indentation width of written files
pub const DEFAULT_INDENT: usize = 4;

/// JSON dataset source
pub struct JsonSource {
    path: String,
}

impl JsonSource {
    /// Create a new JSON dataset source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonSource {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }
}

impl DataSource for JsonSource {
    fn read(&self) -> Result<Dataset, StorageError> {
        let file = File::open(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let json: Value = serde_json::from_reader(reader).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let dataset = Dataset::from_value(json).map_err(|source| StorageError::Dataset {
            path: self.path.clone(),
            source,
        })?;

        trace!("Read {} grids from {}", dataset.grid_count(), self.path);
        Ok(dataset)
    }

    fn name(&self) -> &str {
        &self.path
    }
}

/// JSON dataset sink writing indented, key-order preserving output
pub struct JsonSink {
    path: String,
    indent: usize,
}

impl JsonSink {
    /// Create a new JSON dataset sink
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_indent(path, DEFAULT_INDENT)
    }

    /// Create a new JSON dataset sink with a custom indentation width
    pub fn with_indent<P: AsRef<Path>>(path: P, indent: usize) -> Self {
        JsonSink {
            path: path.as_ref().to_string_lossy().to_string(),
            indent,
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Serialize a dataset with `indent` spaces per level and a trailing newline
pub fn to_string_indented(data: &Dataset, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.as_map().serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

impl DataSink for JsonSink {
    fn write(&self, data: &Dataset) -> Result<(), StorageError> {
        let text = to_string_indented(data, self.indent).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| self.io_error(e))?;

        trace!("Wrote {}", self.path);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }
}
