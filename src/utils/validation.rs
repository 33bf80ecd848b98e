// Validation utilities
// Author: Gabriel Demetrios Lafis

use serde_json::{Map, Value};

/// Validate that a value is a JSON array
pub fn validate_array<'a>(value: &'a Value, name: &str) -> Result<&'a Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| format!("{} must be an array", name))
}

/// Validate that a value is a JSON object
pub fn validate_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>, String> {
    value
        .as_object()
        .ok_or_else(|| format!("{} must be an object", name))
}

/// Validate that all rows share one length, returning that length
pub fn validate_rectangular<T>(rows: &[Vec<T>]) -> Result<usize, String> {
    let width = match rows.first() {
        Some(row) => row.len(),
        None => return Ok(0),
    };

    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != width {
            return Err(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                width
            ));
        }
    }

    Ok(width)
}
