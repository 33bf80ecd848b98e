// Dataset module for train/test puzzle documents
// Author: Gabriel Demetrios Lafis

mod location;
mod rewrite;

pub use location::*;
pub use rewrite::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::grid::GridError;
use crate::utils::{validate_array, validate_object, ErrorKind};

/// A puzzle dataset document.
///
/// The root is a JSON object whose optional `"train"` and `"test"` sections
/// hold arrays of example objects; examples hold optional `"input"` and
/// `"output"` grids. Everything else in the document is opaque and carried
/// through transforms verbatim, in its original key order.
///
/// The section/example shape is checked once on construction, so traversal
/// never has to fail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Dataset {
    root: Map<String, Value>,
}

impl Dataset {
    /// Create an empty dataset (`{}`)
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Validate a parsed JSON document as a dataset
    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(DatasetError::MalformedDataset(format!(
                    "dataset root must be an object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        for section in Section::ALL {
            let examples = match root.get(section.key()) {
                Some(examples) => validate_array(examples, &format!("section '{}'", section.key()))
                    .map_err(DatasetError::MalformedDataset)?,
                None => continue,
            };

            for (i, example) in examples.iter().enumerate() {
                validate_object(example, &format!("{}[{}]", section.key(), i))
                    .map_err(DatasetError::MalformedDataset)?;
            }
        }

        Ok(Dataset { root })
    }

    /// Build a dataset from already-validated parts
    pub(crate) fn from_map_unchecked(root: Map<String, Value>) -> Self {
        Dataset { root }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Examples of a section, if the section is present
    pub fn examples(&self, section: Section) -> Option<&Vec<Value>> {
        self.root.get(section.key()).and_then(Value::as_array)
    }

    /// Number of examples in a section (0 when absent)
    pub fn section_len(&self, section: Section) -> usize {
        self.examples(section).map_or(0, Vec::len)
    }

    /// Total number of grids reachable by traversal
    pub fn grid_count(&self) -> usize {
        self.enumerate_grids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl TryFrom<Value> for Dataset {
    type Error = DatasetError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Dataset::from_value(value)
    }
}

impl From<Dataset> for Value {
    fn from(dataset: Dataset) -> Self {
        dataset.into_value()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Represents an error in the dataset module
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// The document cannot be traversed as a dataset
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    /// A grid failed to transform
    #[error("Grid {location}: {source}")]
    Grid {
        location: GridLocation,
        source: GridError,
    },

    /// The transformation itself was rejected before traversal
    #[error(transparent)]
    Transform(#[from] GridError),
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatasetError::MalformedDataset(_) => ErrorKind::MalformedDataset,
            DatasetError::Grid { source, .. } => source.kind(),
            DatasetError::Transform(source) => source.kind(),
        }
    }
}
