// Clockwise rotations for grids
// Author: Gabriel Demetrios Lafis

use std::fmt;

use serde_json::Value;

use super::{Grid, GridError};

/// Clockwise rotation angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub fn degrees(&self) -> u32 {
        match self {
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl TryFrom<u32> for Angle {
    type Error = GridError;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Angle::Deg90),
            180 => Ok(Angle::Deg180),
            270 => Ok(Angle::Deg270),
            _ => Err(GridError::InvalidArgument(format!(
                "angle must be 90, 180 or 270, got {}",
                degrees
            ))),
        }
    }
}

impl Grid {
    /// Rotate the grid clockwise.
    ///
    /// For an R x C input:
    /// - 90:  C x R, `out[r][c] = in[R-1-c][r]`
    /// - 180: R x C, `out[r][c] = in[R-1-r][C-1-c]`
    /// - 270: C x R, `out[r][c] = in[c][C-1-r]`
    pub fn rotate(&self, angle: Angle) -> Grid {
        let (height, width) = self.dimensions();

        match angle {
            Angle::Deg90 => self.remap(width, height, |r, c| (height - 1 - c, r)),
            Angle::Deg180 => self.remap(height, width, |r, c| (height - 1 - r, width - 1 - c)),
            Angle::Deg270 => self.remap(width, height, |r, c| (c, width - 1 - r)),
        }
    }
}

/// Rotate a JSON grid clockwise by `angle` degrees
pub fn rotate(grid: &Value, angle: u32) -> Result<Value, GridError> {
    let angle = Angle::try_from(angle)?;
    let grid = Grid::from_json(grid)?;
    Ok(grid.rotate(angle).into_json())
}
