//! Drag-session state machine.
//!
//! One drag gesture at a time: `Idle → Dragging → Idle`. The session is a
//! tagged variant type so a preview target cannot exist without an active
//! drag. It tracks *what* is being dragged and *where* it is hovering; it
//! never touches the layout — resolving a drop is the editor's job.
//!
//! # Invariants
//!
//! 1. A new `Start` while already `Dragging` is an invariant violation
//!    (debug-asserted); the in-flight session is kept, never merged.
//! 2. `take()` always leaves the session `Idle`, whatever state it was in.

use shelfkit_core::{DragSource, DropTarget};

/// Lifecycle of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A piece is being dragged; `preview` is the candidate drop target
    /// currently hovered, if any.
    Dragging {
        source: DragSource,
        preview: Option<DropTarget>,
    },
}

impl DragSession {
    /// A fresh, idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self::Idle
    }

    /// True while a gesture is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The source being dragged, if any.
    #[must_use]
    pub fn source(&self) -> Option<&DragSource> {
        match self {
            Self::Dragging { source, .. } => Some(source),
            Self::Idle => None,
        }
    }

    /// The hovered candidate target, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&DropTarget> {
        match self {
            Self::Dragging { preview, .. } => preview.as_ref(),
            Self::Idle => None,
        }
    }

    /// Begin a gesture. Returns `false` (and keeps the in-flight session)
    /// if one is already active.
    pub fn start(&mut self, source: DragSource) -> bool {
        debug_assert!(
            !self.is_dragging(),
            "drag started while a session is already active"
        );
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging {
            source,
            preview: None,
        };
        true
    }

    /// Track the hovered target while dragging. Returns `true` when the
    /// preview actually changed. Ignored while idle.
    pub fn update(&mut self, target: Option<DropTarget>) -> bool {
        match self {
            Self::Dragging { preview, .. } if *preview != target => {
                *preview = target;
                true
            }
            _ => false,
        }
    }

    /// End the gesture, returning the captured source. Always resets to
    /// `Idle`.
    pub fn take(&mut self) -> Option<DragSource> {
        match std::mem::take(self) {
            Self::Dragging { source, .. } => Some(source),
            Self::Idle => None,
        }
    }
}
