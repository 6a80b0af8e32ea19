#![forbid(unsafe_code)]

//! Layout model, placement algorithm, and persisted snapshot schema for the
//! Shelfkit placement engine.

pub mod model;
pub mod placement;
pub mod snapshot;

pub use model::{Column, Layout, LayoutError, PlacedElement};
pub use placement::{PlacementError, place};
pub use snapshot::{SHELF_SCHEMA_VERSION, ShelfMetadata, ShelfSnapshot, SnapshotError};
