//! Editor composition root.
//!
//! [`ShelfEditor`] owns the committed [`Layout`], the [`DragSession`], and
//! the id minter. Gesture events go in; the editor classifies the source
//! and destination, runs the placement algorithm, and either commits the
//! resulting layout or keeps the previous one. Every transition is
//! synchronous and completes within the triggering event.
//!
//! Rejections are absorbed here: a rejected drop surfaces only as
//! [`EditOutcome::Rejected`] so the render sink knows nothing moved — no
//! error propagates further up.

use tracing::{debug, trace, warn};

use shelfkit_core::{DragSource, DropTarget, GestureEvent, IdMinter};
use shelfkit_layout::{Layout, PlacedElement, PlacementError, ShelfMetadata, ShelfSnapshot, place};

use crate::session::DragSession;
use crate::store::{ShelfId, ShelfStore, StoreError};

/// What one gesture event did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed.
    Unchanged,
    /// The in-flight preview changed; the committed layout did not.
    PreviewChanged,
    /// The committed layout changed.
    Committed,
    /// The drop was rejected; the committed layout is untouched.
    Rejected(PlacementError),
}

/// Owns one editing session's layout and drives it from gesture events.
#[derive(Debug, Default)]
pub struct ShelfEditor {
    layout: Layout,
    session: DragSession,
    minter: IdMinter,
}

impl ShelfEditor {
    /// Editor over an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: Layout::new(),
            session: DragSession::new(),
            minter: IdMinter::new(),
        }
    }

    /// Editor resuming a previously saved layout. The id minter resumes
    /// above every reloaded id so identities are never reused.
    #[must_use]
    pub fn with_layout(layout: Layout) -> Self {
        let minter = IdMinter::starting_at(layout.max_raw_id() + 1);
        Self {
            layout,
            session: DragSession::new(),
            minter,
        }
    }

    /// The committed layout, for rendering and persistence.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The in-flight drag, for preview rendering: the dragged source and
    /// the hovered candidate target.
    #[must_use]
    pub fn preview(&self) -> Option<(&DragSource, Option<&DropTarget>)> {
        self.session
            .source()
            .map(|source| (source, self.session.preview()))
    }

    /// Feed one gesture event through the state machine.
    pub fn handle(&mut self, event: GestureEvent) -> EditOutcome {
        match event {
            GestureEvent::Start(source) => self.on_start(source),
            GestureEvent::Update(target) => {
                if self.session.update(target) {
                    trace!(?target, "drag preview moved");
                    EditOutcome::PreviewChanged
                } else {
                    EditOutcome::Unchanged
                }
            }
            GestureEvent::End(target) => self.on_end(target),
            GestureEvent::Cancel => {
                if self.session.take().is_some() {
                    debug!("drag cancelled, layout untouched");
                    EditOutcome::PreviewChanged
                } else {
                    EditOutcome::Unchanged
                }
            }
        }
    }

    /// Capture the current layout and hand it to the persistence
    /// collaborator.
    pub fn submit(
        &self,
        metadata: ShelfMetadata,
        store: &mut dyn ShelfStore,
    ) -> Result<ShelfId, StoreError> {
        let snapshot = ShelfSnapshot::capture(&self.layout, metadata);
        let id = store.save(&snapshot)?;
        debug!(shelf = %id, elements = snapshot.element_count(), "shelf saved");
        Ok(id)
    }

    fn on_start(&mut self, source: DragSource) -> EditOutcome {
        // Defensive: a board source must resolve against the committed
        // layout, otherwise there is nothing to drag.
        if let DragSource::Board { column, piece } = source
            && !self
                .layout
                .column(column)
                .is_some_and(|c| c.piece(piece).is_some())
        {
            warn!(%column, %piece, "drag started on a piece that is not on the board");
            return EditOutcome::Unchanged;
        }
        if self.session.start(source) {
            trace!(?source, "drag started");
            EditOutcome::PreviewChanged
        } else {
            EditOutcome::Unchanged
        }
    }

    fn on_end(&mut self, target: Option<DropTarget>) -> EditOutcome {
        let Some(source) = self.session.take() else {
            return EditOutcome::Unchanged;
        };

        let Some(target) = target else {
            return self.on_drop_outside(source);
        };

        match source {
            DragSource::Palette { kind } => {
                let id = match self.minter.element_id() {
                    Ok(id) => id,
                    Err(error) => {
                        return EditOutcome::Rejected(PlacementError::IdSpaceExhausted { error });
                    }
                };
                let piece = PlacedElement::new(id, kind);
                match place(&self.layout, piece, &target, &mut self.minter) {
                    Ok(next) => {
                        debug!(piece = %piece.id, ?target, "palette piece placed");
                        self.layout = next;
                        EditOutcome::Committed
                    }
                    Err(error) => {
                        // The minted piece was never inserted; discarding it
                        // is the whole rollback.
                        debug!(%error, "palette drop rejected");
                        EditOutcome::Rejected(error)
                    }
                }
            }
            DragSource::Board { column, piece } => {
                let Some(moving) = self
                    .layout
                    .column(column)
                    .and_then(|c| c.piece(piece))
                    .copied()
                else {
                    warn!(%column, %piece, "dropped a piece that is no longer on the board");
                    return EditOutcome::Unchanged;
                };
                // Remove first so capacity is judged against the reduced
                // stack; same-column reordering must not double-count.
                let intermediate = self.layout.without_piece(piece);
                match place(&intermediate, moving, &target, &mut self.minter) {
                    Ok(next) => {
                        debug!(piece = %piece, ?target, "board piece moved");
                        self.layout = next.without_empty_columns();
                        EditOutcome::Committed
                    }
                    Err(error) => {
                        // Drop the intermediate; the piece snaps back.
                        debug!(%error, "board move rejected, keeping original layout");
                        EditOutcome::Rejected(error)
                    }
                }
            }
        }
    }

    fn on_drop_outside(&mut self, source: DragSource) -> EditOutcome {
        match source {
            // Never added, nothing to roll back.
            DragSource::Palette { .. } => EditOutcome::PreviewChanged,
            DragSource::Board { piece, .. } => {
                if self.layout.find_piece(piece).is_none() {
                    return EditOutcome::Unchanged;
                }
                debug!(%piece, "piece dragged off the board, removing");
                self.layout = self.layout.without_piece(piece).without_empty_columns();
                EditOutcome::Committed
            }
        }
    }
}
