//! Persistence collaborator for finished shelf layouts.
//!
//! The editor treats storage as a black box: hand over a snapshot, get back
//! an id or a failure. [`MemoryShelfStore`] is the in-process
//! implementation used by tests and demos; transport-backed stores live
//! with their transports, behind the same trait.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use shelfkit_layout::{ShelfSnapshot, SnapshotError};

/// Stable identifier for a saved shelf.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShelfId(u64);

impl ShelfId {
    /// Wrap a raw store-assigned id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a store operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The snapshot failed validation and was not saved.
    Invalid { error: SnapshotError },
    /// No shelf with the given id exists.
    NotFound { shelf: ShelfId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { error } => write!(f, "snapshot rejected: {error}"),
            Self::NotFound { shelf } => write!(f, "shelf {shelf} not found"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Invalid { error } = self {
            return Some(error);
        }
        None
    }
}

/// Accepts finished layouts for saving and serves them back for reloads.
pub trait ShelfStore {
    /// Validate and persist a snapshot, returning its assigned id.
    fn save(&mut self, snapshot: &ShelfSnapshot) -> Result<ShelfId, StoreError>;

    /// Load a previously saved snapshot.
    fn load(&self, shelf: ShelfId) -> Result<ShelfSnapshot, StoreError>;
}

/// In-memory shelf store.
#[derive(Debug, Clone, Default)]
pub struct MemoryShelfStore {
    shelves: BTreeMap<ShelfId, ShelfSnapshot>,
    next_id: u64,
}

impl MemoryShelfStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved shelves in id order.
    pub fn shelves(&self) -> impl Iterator<Item = (ShelfId, &ShelfSnapshot)> {
        self.shelves.iter().map(|(id, snapshot)| (*id, snapshot))
    }

    /// Number of saved shelves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    /// True when nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }
}

impl ShelfStore for MemoryShelfStore {
    fn save(&mut self, snapshot: &ShelfSnapshot) -> Result<ShelfId, StoreError> {
        snapshot
            .validate()
            .map_err(|error| StoreError::Invalid { error })?;
        self.next_id += 1;
        let id = ShelfId(self.next_id);
        self.shelves.insert(id, snapshot.clone());
        Ok(id)
    }

    fn load(&self, shelf: ShelfId) -> Result<ShelfSnapshot, StoreError> {
        self.shelves
            .get(&shelf)
            .cloned()
            .ok_or(StoreError::NotFound { shelf })
    }
}
