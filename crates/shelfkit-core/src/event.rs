//! Gesture vocabulary shared by the editor and its input adapters.
//!
//! The editor does not care whether gestures originate from pointer, touch,
//! or keyboard input; adapters translate whatever they receive into
//! [`GestureEvent`]s. Sources and targets are tagged unions so that "which
//! piece is being dragged" is carried explicitly instead of being
//! reconstructed by id comparisons at each use site.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::id::{ColumnId, ElementId};

/// Where a drag gesture picked its piece up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DragSource {
    /// A fresh, not-yet-placed piece lifted from the palette.
    Palette { kind: ElementKind },
    /// A piece already on the board, being relocated.
    Board { column: ColumnId, piece: ElementId },
}

/// Horizontal end of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePosition {
    Left,
    Right,
}

/// Where a drag gesture is hovering or was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// An existing column.
    Column { column: ColumnId },
    /// The far left or right of the workspace; dropping here creates a
    /// new column.
    Edge { position: EdgePosition },
}

/// One abstract gesture event, as delivered by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// A drag began on a resolvable source.
    Start(DragSource),
    /// The candidate drop target changed while dragging. `None` means the
    /// pointer is outside every drop zone.
    Update(Option<DropTarget>),
    /// The drag ended. `None` means it was released outside every drop zone.
    End(Option<DropTarget>),
    /// The gesture was interrupted externally; nothing may change.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_source_wire_shape() {
        let palette = DragSource::Palette {
            kind: ElementKind::Slim,
        };
        assert_eq!(
            serde_json::to_string(&palette).unwrap(),
            r#"{"source":"palette","kind":"slim"}"#
        );

        let board = DragSource::Board {
            column: ColumnId::new(3).unwrap(),
            piece: ElementId::new(9).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&board).unwrap(),
            r#"{"source":"board","column":3,"piece":9}"#
        );
    }

    #[test]
    fn drop_target_wire_shape() {
        let column = DropTarget::Column {
            column: ColumnId::new(5).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&column).unwrap(),
            r#"{"kind":"column","column":5}"#
        );

        let edge = DropTarget::Edge {
            position: EdgePosition::Left,
        };
        assert_eq!(
            serde_json::to_string(&edge).unwrap(),
            r#"{"kind":"edge","position":"left"}"#
        );
    }
}
