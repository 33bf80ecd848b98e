// Mirror transforms for grids
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::{Grid, GridError};

/// Mirror axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Reverse the cells of each row (left-right mirror)
    Vertical,
    /// Reverse the order of the rows (top-bottom mirror)
    Horizontal,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Axis::Vertical),
            "horizontal" => Ok(Axis::Horizontal),
            _ => Err(GridError::InvalidArgument(format!(
                "axis must be 'vertical' or 'horizontal', got '{}'",
                s
            ))),
        }
    }
}

impl Grid {
    /// Mirror the grid along `axis`; dimensions are unchanged
    pub fn flip(&self, axis: Axis) -> Grid {
        let (height, width) = self.dimensions();

        match axis {
            Axis::Vertical => self.remap(height, width, |r, c| (r, width - 1 - c)),
            Axis::Horizontal => self.remap(height, width, |r, c| (height - 1 - r, c)),
        }
    }
}

/// Flip a JSON grid along the named axis
pub fn flip(grid: &Value, axis: &str) -> Result<Value, GridError> {
    let axis: Axis = axis.parse()?;
    let grid = Grid::from_json(grid)?;
    Ok(grid.flip(axis).into_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vertical_flip_mirrors_rows() {
        let result = flip(&json!([[1, 2, 3], [4, 5, 6]]), "vertical").unwrap();
        assert_eq!(result, json!([[3, 2, 1], [6, 5, 4]]));
    }

    #[test]
    fn test_horizontal_flip_reverses_rows() {
        let result = flip(&json!([[1, 2, 3], [4, 5, 6]]), "horizontal").unwrap();
        assert_eq!(result, json!([[4, 5, 6], [1, 2, 3]]));
    }

    #[test]
    fn test_flip_is_an_involution() {
        let grid = Grid::from_json(&json!([[1, 2, 3], [4, 5, 6], [7, 8, 9], [0, 0, 1]])).unwrap();

        for axis in [Axis::Vertical, Axis::Horizontal] {
            assert_eq!(grid.flip(axis).flip(axis), grid);
        }
    }

    #[test]
    fn test_flip_preserves_dimensions() {
        let grid = Grid::from_json(&json!([[1, 2, 3], [4, 5, 6]])).unwrap();
        assert_eq!(grid.flip(Axis::Vertical).dimensions(), (2, 3));
        assert_eq!(grid.flip(Axis::Horizontal).dimensions(), (2, 3));
    }

    #[test]
    fn test_flip_unknown_axis() {
        let err = flip(&json!([[1]]), "diagonal").unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument(_)));
    }

    #[test]
    fn test_flip_rejects_non_array_row() {
        let err = flip(&json!([[1, 2], "34"]), "vertical").unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_flip_does_not_touch_input() {
        let input = json!([[1, 2], [3, 4]]);
        let snapshot = input.clone();
        let _ = flip(&input, "horizontal").unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_flip_empty_grid() {
        assert_eq!(flip(&json!([]), "vertical").unwrap(), json!([]));
        assert_eq!(flip(&json!([[], []]), "vertical").unwrap(), json!([[], []]));
    }
}
