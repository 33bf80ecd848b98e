// Grid Augment
// Author: Gabriel Demetrios Lafis

//! # Grid Augment
//!
//! Geometric augmentation of grid puzzle datasets stored as JSON.
//!
//! A dataset holds `"train"` and `"test"` sections of examples, each with an
//! `"input"` and/or `"output"` grid. Every grid of a dataset can be flipped
//! or rotated, leaving the rest of the document untouched.
//!
//! ## Features
//!
//! - Pure grid transforms: vertical/horizontal flip, 90/180/270 rotation
//! - Ordered traversal of every grid in a dataset
//! - All-or-nothing dataset rewriting that never mutates its input
//! - Batch augmentation of a folder into five files per dataset
//!
//! ## Example
//!
//! ```rust
//! use grid_augment::{
//!     dataset::Dataset,
//!     transform::{transform_dataset, Operation, Params, Transformation},
//! };
//! use serde_json::json;
//!
//! let dataset = Dataset::from_value(json!({
//!     "train": [{"input": [[1, 2], [3, 4]], "output": [[5, 6], [7, 8]]}]
//! })).unwrap();
//!
//! let rotated = transform_dataset(&dataset, Operation::Rotate, &Params::angle(90)).unwrap();
//! assert_eq!(
//!     rotated.into_value(),
//!     json!({"train": [{"input": [[3, 1], [4, 2]], "output": [[7, 5], [8, 6]]}]})
//! );
//!
//! let flipped = Transformation::VerticalFlip.apply(&dataset).unwrap();
//! assert_eq!(flipped.into_value()["train"][0]["input"], json!([[2, 1], [4, 3]]));
//! ```

pub mod batch;
pub mod dataset;
pub mod grid;
pub mod storage;
pub mod transform;
pub mod utils;

// Re-export main types
pub use batch::{BatchProcessor, BatchReport};
pub use dataset::{Dataset, DatasetError};
pub use grid::{Grid, GridError};
pub use transform::{transform_dataset, transform_grid, Operation, Params, Transformation};
pub use utils::{AppError, AppResult, Config, ErrorKind};
