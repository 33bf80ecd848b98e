// Grid module for rectangular puzzle grids and their geometric transforms
// Author: Gabriel Demetrios Lafis

mod flip;
mod rotate;

pub use flip::*;
pub use rotate::*;

use serde_json::Value;
use thiserror::Error;

use crate::utils::{validate_array, validate_rectangular, ErrorKind};

/// A rectangular 2-D array of puzzle cells.
///
/// Cells are kept as raw JSON values so that whatever the dataset stores
/// (numbers in practice) survives a transform untouched. A `Grid` can only
/// be built through [`Grid::from_json`] or [`Grid::from_rows`], both of which
/// reject ragged input, so every method may rely on all rows sharing one
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Value>>,
    width: usize,
}

impl Grid {
    /// Build a grid from owned rows, checking rectangularity
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self, GridError> {
        let width = validate_rectangular(&rows).map_err(GridError::InvalidInput)?;
        Ok(Grid { rows, width })
    }

    /// Parse a grid out of a JSON value
    pub fn from_json(value: &Value) -> Result<Self, GridError> {
        let outer = validate_array(value, "grid").map_err(GridError::InvalidInput)?;

        let rows = outer
            .iter()
            .enumerate()
            .map(|(i, row)| {
                validate_array(row, &format!("row {}", i))
                    .cloned()
                    .map_err(GridError::InvalidInput)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Convert the grid back into a JSON array of arrays
    pub fn into_json(self) -> Value {
        Value::Array(self.rows.into_iter().map(Value::Array).collect())
    }

    /// Clone the grid into a JSON array of arrays
    pub fn to_json(&self) -> Value {
        self.clone().into_json()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 for a grid without rows)
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Get a reference to a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Build a `height` x `width` grid by pulling each cell from `self`.
    ///
    /// `source(r, c)` must return in-bounds coordinates of `self` for every
    /// output position; all geometric transforms are expressed this way.
    fn remap<F>(&self, height: usize, width: usize, source: F) -> Grid
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let rows = (0..height)
            .map(|r| {
                (0..width)
                    .map(|c| {
                        let (sr, sc) = source(r, c);
                        self.rows[sr][sc].clone()
                    })
                    .collect()
            })
            .collect();

        Grid { rows, width: if height == 0 { 0 } else { width } }
    }
}

/// Represents an error in the grid module
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The value is not a rectangular array of arrays
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported axis, angle or missing parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::InvalidInput(_) => ErrorKind::InvalidInput,
            GridError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_dimensions() {
        let grid = Grid::from_json(&json!([[1, 2, 3], [4, 5, 6]])).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(1, 2), Some(&json!(6)));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Grid::from_json(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_from_json_rejects_non_array_row() {
        let err = Grid::from_json(&json!([[1, 2], 3])).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidInput("row 1 must be an array".to_string())
        );
    }

    #[test]
    fn test_from_json_rejects_ragged_rows() {
        let err = Grid::from_json(&json!([[1, 2], [3]])).unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_json(&json!([])).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));
        assert_eq!(grid.into_json(), json!([]));
    }

    #[test]
    fn test_json_round_trip_keeps_cell_values() {
        let value = json!([[0, 1.5], ["x", null]]);
        let grid = Grid::from_json(&value).unwrap();
        assert_eq!(grid.to_json(), value);
    }
}
