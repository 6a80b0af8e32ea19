#![forbid(unsafe_code)]

//! Core vocabulary for the Shelfkit placement engine: element kinds and
//! their static catalog, stable id minting, and the gesture event types
//! adapters feed into the editor.

pub mod element;
pub mod event;
pub mod id;

pub use element::{ElementDefinition, ElementKind, MAX_STACK_UNITS};
pub use event::{DragSource, DropTarget, EdgePosition, GestureEvent};
pub use id::{ColumnId, ElementId, IdError, IdMinter};
