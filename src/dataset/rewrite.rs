// Grid traversal and reconstruction for datasets
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use log::{debug, trace};
use serde_json::{Map, Value};

use super::{Dataset, DatasetError, GridEntry, GridKind, GridLocation, Section};
use crate::grid::{Grid, GridError};

impl Dataset {
    /// Lazily walk every grid in the dataset.
    ///
    /// Sections are visited as `train`, `test`; examples in array order;
    /// grids as `input`, `output`. Missing sections and keys are skipped.
    pub fn enumerate_grids(&self) -> impl Iterator<Item = GridEntry<'_>> + '_ {
        Section::ALL
            .into_iter()
            .filter_map(move |section| self.examples(section).map(|examples| (section, examples)))
            .flat_map(|(section, examples)| {
                examples.iter().enumerate().flat_map(move |(index, example)| {
                    GridKind::ALL.into_iter().filter_map(move |kind| {
                        example.get(kind.key()).map(|grid| GridEntry {
                            location: GridLocation::new(section, index, kind),
                            grid,
                        })
                    })
                })
            })
    }

    /// Build a new dataset with `transform` applied to every grid.
    ///
    /// All grids are transformed before any output is assembled, so the
    /// first failure is returned and nothing else is produced. Non-grid
    /// values are copied verbatim in their original order.
    pub fn apply_transform<F>(&self, transform: F) -> Result<Dataset, DatasetError>
    where
        F: Fn(&Grid) -> Result<Grid, GridError>,
    {
        let mut replacements = self
            .enumerate_grids()
            .map(|entry| {
                trace!("Transforming grid {}", entry.location);
                Grid::from_json(entry.grid)
                    .and_then(|grid| transform(&grid))
                    .map(|grid| (entry.location, grid.into_json()))
                    .map_err(|source| DatasetError::Grid {
                        location: entry.location,
                        source,
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let count = replacements.len();

        let root = self
            .as_map()
            .iter()
            .map(|(key, value)| {
                let value = match Section::from_key(key) {
                    Some(section) => rebuild_section(section, value, &mut replacements),
                    None => value.clone(),
                };
                (key.clone(), value)
            })
            .collect();

        debug_assert!(replacements.is_empty());
        debug!("Rewrote {} grids", count);

        Ok(Dataset::from_map_unchecked(root))
    }
}

/// Walk a dataset's grids; see [`Dataset::enumerate_grids`]
pub fn enumerate_grids(dataset: &Dataset) -> impl Iterator<Item = GridEntry<'_>> + '_ {
    dataset.enumerate_grids()
}

/// Transform every grid of a dataset; see [`Dataset::apply_transform`]
pub fn apply_transform<F>(dataset: &Dataset, transform: F) -> Result<Dataset, DatasetError>
where
    F: Fn(&Grid) -> Result<Grid, GridError>,
{
    dataset.apply_transform(transform)
}

fn rebuild_section(
    section: Section,
    examples: &Value,
    replacements: &mut HashMap<GridLocation, Value>,
) -> Value {
    match examples {
        Value::Array(examples) => Value::Array(
            examples
                .iter()
                .enumerate()
                .map(|(index, example)| rebuild_example(section, index, example, replacements))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn rebuild_example(
    section: Section,
    index: usize,
    example: &Value,
    replacements: &mut HashMap<GridLocation, Value>,
) -> Value {
    let fields = match example {
        Value::Object(fields) => fields,
        other => return other.clone(),
    };

    let rebuilt: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| {
            let value = GridKind::from_key(key)
                .and_then(|kind| replacements.remove(&GridLocation::new(section, index, kind)))
                .unwrap_or_else(|| value.clone());
            (key.clone(), value)
        })
        .collect();

    Value::Object(rebuilt)
}
