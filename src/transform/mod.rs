// Transformation catalogue and the grid/dataset entry points
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::{Dataset, DatasetError};
use crate::grid::{Angle, Axis, Grid, GridError};

/// Grid operation, bound to its parameters through [`Params`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Flip,
    Rotate,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Flip => "flip",
            Operation::Rotate => "rotate",
        }
    }
}

/// Parameters of an [`Operation`]; `flip` needs `axis`, `rotate` needs `angle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<u32>,
}

impl Params {
    pub fn axis(axis: &str) -> Self {
        Params {
            axis: Some(axis.to_string()),
            angle: None,
        }
    }

    pub fn angle(angle: u32) -> Self {
        Params {
            axis: None,
            angle: Some(angle),
        }
    }
}

/// An operation resolved against its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    Flip(Axis),
    Rotate(Angle),
}

impl Resolved {
    fn new(operation: Operation, params: &Params) -> Result<Self, GridError> {
        match operation {
            Operation::Flip => {
                let axis = params.axis.as_deref().ok_or_else(|| {
                    GridError::InvalidArgument("flip requires an 'axis' parameter".to_string())
                })?;
                Ok(Resolved::Flip(axis.parse()?))
            }
            Operation::Rotate => {
                let angle = params.angle.ok_or_else(|| {
                    GridError::InvalidArgument("rotate requires an 'angle' parameter".to_string())
                })?;
                Ok(Resolved::Rotate(Angle::try_from(angle)?))
            }
        }
    }

    fn apply(&self, grid: &Grid) -> Grid {
        match *self {
            Resolved::Flip(axis) => grid.flip(axis),
            Resolved::Rotate(angle) => grid.rotate(angle),
        }
    }
}

/// Transform a single JSON grid
pub fn transform_grid(grid: &Value, operation: Operation, params: &Params) -> Result<Value, GridError> {
    let resolved = Resolved::new(operation, params)?;
    let grid = Grid::from_json(grid)?;
    Ok(resolved.apply(&grid).into_json())
}

/// Transform every grid of a dataset, returning a new dataset.
///
/// Parameters are checked before traversal, so an unsupported axis or angle
/// fails even when the dataset holds no grids.
pub fn transform_dataset(
    dataset: &Dataset,
    operation: Operation,
    params: &Params,
) -> Result<Dataset, DatasetError> {
    let resolved = Resolved::new(operation, params)?;
    debug!("Applying {:?} to {} grids", resolved, dataset.grid_count());
    dataset.apply_transform(|grid| Ok(resolved.apply(grid)))
}

/// The fixed set of augmentations written for every dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    VerticalFlip,
    HorizontalFlip,
    #[serde(rename = "rotate_90")]
    Rotate90,
    #[serde(rename = "rotate_180")]
    Rotate180,
    #[serde(rename = "rotate_270")]
    Rotate270,
}

impl Transformation {
    /// Every transformation, in output order
    pub const ALL: [Transformation; 5] = [
        Transformation::VerticalFlip,
        Transformation::HorizontalFlip,
        Transformation::Rotate90,
        Transformation::Rotate180,
        Transformation::Rotate270,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Transformation::VerticalFlip => "vertical_flip",
            Transformation::HorizontalFlip => "horizontal_flip",
            Transformation::Rotate90 => "rotate_90",
            Transformation::Rotate180 => "rotate_180",
            Transformation::Rotate270 => "rotate_270",
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Transformation::VerticalFlip | Transformation::HorizontalFlip => Operation::Flip,
            _ => Operation::Rotate,
        }
    }

    pub fn params(&self) -> Params {
        match self {
            Transformation::VerticalFlip => Params::axis(Axis::Vertical.as_str()),
            Transformation::HorizontalFlip => Params::axis(Axis::Horizontal.as_str()),
            Transformation::Rotate90 => Params::angle(90),
            Transformation::Rotate180 => Params::angle(180),
            Transformation::Rotate270 => Params::angle(270),
        }
    }

    pub fn apply_grid(&self, grid: &Value) -> Result<Value, GridError> {
        transform_grid(grid, self.operation(), &self.params())
    }

    pub fn apply(&self, dataset: &Dataset) -> Result<Dataset, DatasetError> {
        transform_dataset(dataset, self.operation(), &self.params())
    }

    /// `<base>_<name>.json`
    pub fn output_file_name(&self, base: &str) -> String {
        format!("{}_{}.json", base, self.name())
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| GridError::InvalidArgument(format!("unknown transformation '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorKind;
    use serde_json::json;

    fn scenario() -> Dataset {
        Dataset::from_value(json!({
            "train": [{"input": [[1, 2], [3, 4]], "output": [[5, 6], [7, 8]]}]
        }))
        .unwrap()
    }

    #[test]
    fn test_vertical_flip_scenario() {
        let result = Transformation::VerticalFlip.apply(&scenario()).unwrap();
        assert_eq!(
            result.into_value(),
            json!({"train": [{"input": [[2, 1], [4, 3]], "output": [[6, 5], [8, 7]]}]})
        );
    }

    #[test]
    fn test_rotate_90_scenario() {
        let result = Transformation::Rotate90.apply(&scenario()).unwrap();
        assert_eq!(
            result.into_value(),
            json!({"train": [{"input": [[3, 1], [4, 2]], "output": [[7, 5], [8, 6]]}]})
        );
    }

    #[test]
    fn test_empty_dataset_is_unchanged() {
        for transformation in Transformation::ALL {
            let result = transformation.apply(&Dataset::new()).unwrap();
            assert_eq!(result.into_value(), json!({}));
        }
    }

    #[test]
    fn test_transform_dataset_does_not_mutate_input() {
        let dataset = scenario();
        let snapshot = dataset.clone();

        for transformation in Transformation::ALL {
            let _ = transformation.apply(&dataset).unwrap();
        }

        assert_eq!(dataset, snapshot);
    }

    #[test]
    fn test_transform_dataset_preserves_structure() {
        let dataset = Dataset::from_value(json!({
            "name": "task",
            "train": [{"input": [[1, 2, 3]], "extra": [1, 2]}, {"output": [[4], [5]]}],
            "test": [{"input": [[0]], "output": [[1]]}]
        }))
        .unwrap();

        for transformation in Transformation::ALL {
            let result = transformation.apply(&dataset).unwrap();
            let result = result.into_value();

            assert_eq!(result["name"], json!("task"));
            assert_eq!(result["train"].as_array().unwrap().len(), 2);
            assert_eq!(result["test"].as_array().unwrap().len(), 1);
            assert_eq!(result["train"][0]["extra"], json!([1, 2]));
            assert!(result["train"][0].get("output").is_none());
            assert!(result["train"][1].get("input").is_none());
        }
    }

    #[test]
    fn test_transform_grid_entry_point() {
        let grid = json!([[1, 2], [3, 4]]);
        assert_eq!(
            transform_grid(&grid, Operation::Flip, &Params::axis("horizontal")).unwrap(),
            json!([[3, 4], [1, 2]])
        );
        assert_eq!(
            transform_grid(&grid, Operation::Rotate, &Params::angle(270)).unwrap(),
            json!([[2, 4], [1, 3]])
        );
    }

    #[test]
    fn test_missing_or_bad_params() {
        let grid = json!([[1]]);

        let err = transform_grid(&grid, Operation::Flip, &Params::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = transform_grid(&grid, Operation::Rotate, &Params::axis("vertical")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = transform_dataset(&Dataset::new(), Operation::Rotate, &Params::angle(45)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_ragged_grid_fails_dataset() {
        let dataset = Dataset::from_value(json!({"test": [{"input": [[1, 2], [3]]}]})).unwrap();
        let err = Transformation::Rotate90.apply(&dataset).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_names_and_file_names() {
        let names: Vec<String> = Transformation::ALL
            .iter()
            .map(|t| t.output_file_name("task"))
            .collect();

        assert_eq!(
            names,
            vec![
                "task_vertical_flip.json",
                "task_horizontal_flip.json",
                "task_rotate_90.json",
                "task_rotate_180.json",
                "task_rotate_270.json",
            ]
        );

        for t in Transformation::ALL {
            assert_eq!(t.name().parse::<Transformation>().unwrap(), t);
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.name()));
        }
        assert!("rotate_45".parse::<Transformation>().is_err());
    }

    #[test]
    fn test_params_deserialize() {
        let params: Params = serde_json::from_value(json!({"angle": 180})).unwrap();
        assert_eq!(params, Params::angle(180));

        let op: Operation = serde_json::from_value(json!("flip")).unwrap();
        assert_eq!(op, Operation::Flip);
    }
}
