#![forbid(unsafe_code)]

//! Shelfkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the placement engine's types from the internal crates and
//! offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use shelfkit_core::{
    ColumnId, DragSource, DropTarget, EdgePosition, ElementDefinition, ElementId, ElementKind,
    GestureEvent, IdError, IdMinter, MAX_STACK_UNITS,
};

// --- Layout re-exports -----------------------------------------------------

pub use shelfkit_layout::{
    Column, Layout, LayoutError, PlacedElement, PlacementError, SHELF_SCHEMA_VERSION,
    ShelfMetadata, ShelfSnapshot, SnapshotError, place,
};

// --- Editor re-exports -----------------------------------------------------

pub use shelfkit_editor::{
    DragSession, EditOutcome, MemoryShelfStore, ShelfEditor, ShelfId, ShelfStore, StoreError,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        DragSource, DropTarget, EdgePosition, ElementKind, GestureEvent, Layout, MAX_STACK_UNITS,
        PlacedElement, ShelfEditor, ShelfMetadata, ShelfSnapshot, ShelfStore, place,
    };
}
