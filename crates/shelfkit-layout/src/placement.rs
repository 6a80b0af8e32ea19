//! The placement algorithm: resolve one piece and one drop target against a
//! layout, producing either a new layout or a rejection.
//!
//! [`place`] is a pure function. Rejections are ordinary values — a rejected
//! drop is routine interaction (an overfull column), not a fault — and the
//! input layout is never modified, so a caller that keeps its previous value
//! on `Err` gets exactly the no-op behavior the editor wants.
//!
//! Pruning of emptied columns is deliberately not done here; it is the
//! caller's concern after a move settles.

use std::fmt;

use shelfkit_core::{ColumnId, DropTarget, EdgePosition, IdError, IdMinter, MAX_STACK_UNITS};

use crate::model::{Column, Layout, PlacedElement};

/// Why a placement did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The target column id does not exist in the layout.
    ColumnNotFound { column: ColumnId },
    /// The piece does not fit under the column's height budget.
    CapacityExceeded {
        column: ColumnId,
        used_units: u8,
        piece_units: u8,
    },
    /// No fresh id could be minted for a new edge column.
    IdSpaceExhausted { error: IdError },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound { column } => {
                write!(f, "target column {column} not found")
            }
            Self::CapacityExceeded {
                column,
                used_units,
                piece_units,
            } => write!(
                f,
                "column {column} holds {used_units}/{MAX_STACK_UNITS} units, not enough room for a {piece_units}-unit piece"
            ),
            Self::IdSpaceExhausted { error } => {
                write!(f, "cannot mint a column id: {error}")
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::IdSpaceExhausted { error } = self {
            return Some(error);
        }
        None
    }
}

/// Place `piece` at `target` within `layout`.
///
/// Edge targets always succeed: a fresh single-piece column is minted and
/// inserted at the chosen end. Column targets are capacity-checked and the
/// piece lands at the drop end (index 0). On `Err` the layout argument is
/// untouched — no partial placement, no trimming.
///
/// A piece being moved out of the target column must be removed by the
/// caller before calling `place`, so capacity is evaluated against the
/// reduced stack and same-column reordering never rejects spuriously.
pub fn place(
    layout: &Layout,
    piece: PlacedElement,
    target: &DropTarget,
    minter: &mut IdMinter,
) -> Result<Layout, PlacementError> {
    match *target {
        DropTarget::Edge { position } => {
            let id = minter
                .column_id()
                .map_err(|error| PlacementError::IdSpaceExhausted { error })?;
            let fresh = Column::with_piece(id, piece);
            Ok(match position {
                EdgePosition::Left => layout.with_column_prepended(fresh),
                EdgePosition::Right => layout.with_column_appended(fresh),
            })
        }
        DropTarget::Column { column: column_id } => {
            let Some(column) = layout.column(column_id) else {
                return Err(PlacementError::ColumnNotFound { column: column_id });
            };
            let used_units = column.used_units();
            let piece_units = piece.height_units();
            if MAX_STACK_UNITS.saturating_sub(used_units) < piece_units {
                return Err(PlacementError::CapacityExceeded {
                    column: column_id,
                    used_units,
                    piece_units,
                });
            }
            Ok(layout.with_column_replaced(column_id, column.with_piece_prepended(piece)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfkit_core::ElementKind;

    fn slim(minter: &mut IdMinter) -> PlacedElement {
        PlacedElement::new(minter.element_id().unwrap(), ElementKind::Slim)
    }

    fn high(minter: &mut IdMinter) -> PlacedElement {
        PlacedElement::new(minter.element_id().unwrap(), ElementKind::High)
    }

    #[test]
    fn edge_drop_on_empty_layout_creates_one_column() {
        let mut minter = IdMinter::new();
        let piece = slim(&mut minter);
        let layout = place(
            &Layout::new(),
            piece,
            &DropTarget::Edge {
                position: EdgePosition::Right,
            },
            &mut minter,
        )
        .unwrap();

        assert_eq!(layout.columns().len(), 1);
        assert_eq!(layout.columns()[0].elements, vec![piece]);
    }

    #[test]
    fn left_edge_prepends_right_edge_appends() {
        let mut minter = IdMinter::new();
        let seed = slim(&mut minter);
        let layout = place(
            &Layout::new(),
            seed,
            &DropTarget::Edge {
                position: EdgePosition::Right,
            },
            &mut minter,
        )
        .unwrap();
        let seed_column = layout.columns()[0].id;

        let left = slim(&mut minter);
        let layout = place(
            &layout,
            left,
            &DropTarget::Edge {
                position: EdgePosition::Left,
            },
            &mut minter,
        )
        .unwrap();
        assert_eq!(layout.columns()[0].elements, vec![left]);
        assert_eq!(layout.columns()[1].id, seed_column);

        let right = high(&mut minter);
        let layout = place(
            &layout,
            right,
            &DropTarget::Edge {
                position: EdgePosition::Right,
            },
            &mut minter,
        )
        .unwrap();
        assert_eq!(layout.columns()[2].elements, vec![right]);
    }

    #[test]
    fn column_drop_prepends_at_index_zero() {
        // Three slims (3 units), then a high: fits, lands at index 0.
        let mut minter = IdMinter::new();
        let mut column = Column::with_piece(minter.column_id().unwrap(), slim(&mut minter));
        column = column.with_piece_prepended(slim(&mut minter));
        column = column.with_piece_prepended(slim(&mut minter));
        let target = DropTarget::Column { column: column.id };
        let layout = Layout::new().with_column_appended(column);

        let incoming = high(&mut minter);
        let placed = place(&layout, incoming, &target, &mut minter).unwrap();
        let column = &placed.columns()[0];
        assert_eq!(column.elements.len(), 4);
        assert_eq!(column.used_units(), 5);
        assert_eq!(column.elements[0], incoming);
    }

    #[test]
    fn full_column_rejects_without_touching_the_layout() {
        let mut minter = IdMinter::new();
        let mut column = Column::with_piece(minter.column_id().unwrap(), high(&mut minter));
        for _ in 0..3 {
            column = column.with_piece_prepended(high(&mut minter));
        }
        assert_eq!(column.used_units(), MAX_STACK_UNITS);
        let target = DropTarget::Column { column: column.id };
        let layout = Layout::new().with_column_appended(column);
        let before = layout.clone();

        let result = place(&layout, high(&mut minter), &target, &mut minter);
        assert!(matches!(
            result,
            Err(PlacementError::CapacityExceeded {
                used_units: 8,
                piece_units: 2,
                ..
            })
        ));
        assert_eq!(layout, before);
        assert_eq!(layout.columns()[0].elements.len(), 4);
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut minter = IdMinter::new();
        let mut column = Column::with_piece(minter.column_id().unwrap(), high(&mut minter));
        for _ in 0..2 {
            column = column.with_piece_prepended(high(&mut minter));
        }
        // 6 units used; a high piece fills it to exactly 8.
        let target = DropTarget::Column { column: column.id };
        let layout = Layout::new().with_column_appended(column);

        let placed = place(&layout, high(&mut minter), &target, &mut minter).unwrap();
        assert_eq!(placed.columns()[0].used_units(), MAX_STACK_UNITS);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut minter = IdMinter::new();
        let ghost = minter.column_id().unwrap();
        let result = place(
            &Layout::new(),
            slim(&mut minter),
            &DropTarget::Column { column: ghost },
            &mut minter,
        );
        assert_eq!(result, Err(PlacementError::ColumnNotFound { column: ghost }));
    }
}
