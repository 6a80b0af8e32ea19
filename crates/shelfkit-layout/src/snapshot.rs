//! Persisted shelf schema with versioning and validation.
//!
//! A [`ShelfSnapshot`] is the finished value handed to the persistence
//! collaborator: the layout's columns plus identifying metadata. Loaders
//! reject unknown schema versions and structurally invalid layouts instead
//! of repairing them.
//!
//! # Schema Versioning Policy
//!
//! - Breaking changes (field removal, semantic changes) require incrementing
//!   [`SHELF_SCHEMA_VERSION`].
//! - All snapshots carry their schema version; [`ShelfSnapshot::validate`]
//!   rejects unknown versions.

use std::fmt;

use serde::{Deserialize, Serialize};
use shelfkit_core::ColumnId;

use crate::model::{Column, Layout, LayoutError};

/// Current shelf schema version.
pub const SHELF_SCHEMA_VERSION: u16 = 1;

/// Identifying metadata for a persisted shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfMetadata {
    pub name: String,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

impl ShelfMetadata {
    /// Metadata with a name only.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            building: None,
            room: None,
        }
    }

    /// Attach a building name.
    #[must_use]
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Attach a room name.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// Persisted shelf state: metadata plus the layout's columns.
///
/// Columns and elements serialize with their `id` and `type`/`elements`
/// fields intact, so a reload reconstructs an identical layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfSnapshot {
    /// Schema version for migration detection.
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    /// Identifying metadata (name, building, room).
    pub metadata: ShelfMetadata,
    /// Column stacks, left to right.
    pub columns: Vec<Column>,
}

fn default_schema_version() -> u16 {
    SHELF_SCHEMA_VERSION
}

impl ShelfSnapshot {
    /// Capture the current layout under the given metadata.
    #[must_use]
    pub fn capture(layout: &Layout, metadata: ShelfMetadata) -> Self {
        Self {
            schema_version: SHELF_SCHEMA_VERSION,
            metadata,
            columns: layout.columns().to_vec(),
        }
    }

    /// Reconstruct the layout value this snapshot captured.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::from_columns(self.columns.clone())
    }

    /// Total number of elements across all columns.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.columns.iter().map(|column| column.elements.len()).sum()
    }

    /// Validate schema version and structural invariants.
    ///
    /// Empty columns are transient editing state and must never be
    /// persisted, so they are rejected here even though the layout model
    /// tolerates them mid-move.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.schema_version != SHELF_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.schema_version,
                expected: SHELF_SCHEMA_VERSION,
            });
        }
        if let Some(empty) = self.columns.iter().find(|column| column.is_empty()) {
            return Err(SnapshotError::EmptyColumn { column: empty.id });
        }
        self.layout()
            .check_invariants()
            .map_err(|error| SnapshotError::Layout { error })
    }
}

/// Why a snapshot was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was written by an incompatible schema.
    UnsupportedVersion { found: u16, expected: u16 },
    /// A persisted column holds no elements.
    EmptyColumn { column: ColumnId },
    /// The captured layout violates a structural invariant.
    Layout { error: LayoutError },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, expected } => {
                write!(f, "unsupported shelf schema version {found} (expected {expected})")
            }
            Self::EmptyColumn { column } => {
                write!(f, "column {column} is empty and may not be persisted")
            }
            Self::Layout { error } => write!(f, "invalid layout: {error}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Layout { error } = self {
            return Some(error);
        }
        None
    }
}
