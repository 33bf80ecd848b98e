// Addressing of grids inside a dataset
// Author: Gabriel Demetrios Lafis

use std::fmt;

use serde_json::Value;

/// Top-level dataset section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Train,
    Test,
}

impl Section {
    /// Traversal order
    pub const ALL: [Section; 2] = [Section::Train, Section::Test];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Train => "train",
            Section::Test => "test",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

/// Which grid of an example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    Input,
    Output,
}

impl GridKind {
    /// Traversal order
    pub const ALL: [GridKind; 2] = [GridKind::Input, GridKind::Output];

    pub fn key(&self) -> &'static str {
        match self {
            GridKind::Input => "input",
            GridKind::Output => "output",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }
}

/// Position of one grid: section, example index, grid kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLocation {
    pub section: Section,
    pub example: usize,
    pub kind: GridKind,
}

impl GridLocation {
    pub fn new(section: Section, example: usize, kind: GridKind) -> Self {
        GridLocation { section, example, kind }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}].{}", self.section.key(), self.example, self.kind.key())
    }
}

/// A grid found during traversal, borrowed from its dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEntry<'a> {
    pub location: GridLocation,
    pub grid: &'a Value,
}
