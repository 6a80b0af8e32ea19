//! Immutable layout value model: placed elements, columns, and the layout
//! itself.
//!
//! All transformations are pure — each returns a new value and leaves the
//! receiver untouched. Columns stack vertically with index 0 at the drop
//! end, so the newest piece always lands first in the list. Column order in
//! a layout is left-to-right and only ever changes by insertion at one of
//! the two edges.
//!
//! # Invariants
//!
//! 1. Every column satisfies `used_units() <= MAX_STACK_UNITS`.
//! 2. No element id appears in more than one column; no column id repeats.
//! 3. Empty columns are transient: they may exist mid-move, but every
//!    settled layout has been pruned via [`Layout::without_empty_columns`].
//!
//! Heights are derived from the element catalog, never stored per piece, so
//! a catalog change cannot disagree with persisted state.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use shelfkit_core::{ColumnId, ElementId, ElementKind, MAX_STACK_UNITS};

/// One physical shelf unit placed on the board.
///
/// Identity is minted when a palette drag first resolves and is stable for
/// the element's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
}

impl PlacedElement {
    /// Construct a placed element.
    #[must_use]
    pub const fn new(id: ElementId, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    /// Height in base units, via the catalog.
    #[must_use]
    pub const fn height_units(self) -> u8 {
        self.kind.height_units()
    }
}

/// A vertical stack of elements sharing one horizontal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub elements: Vec<PlacedElement>,
}

impl Column {
    /// A column holding exactly one piece.
    #[must_use]
    pub fn with_piece(id: ColumnId, piece: PlacedElement) -> Self {
        Self {
            id,
            elements: vec![piece],
        }
    }

    /// Total stacked height in base units.
    #[must_use]
    pub fn used_units(&self) -> u8 {
        self.elements
            .iter()
            .map(|element| element.height_units())
            .sum()
    }

    /// Headroom left under [`MAX_STACK_UNITS`].
    #[must_use]
    pub fn remaining_units(&self) -> u8 {
        MAX_STACK_UNITS.saturating_sub(self.used_units())
    }

    /// True when no elements remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Lookup one piece by id.
    #[must_use]
    pub fn piece(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// New column with `piece` stacked at the drop end (index 0).
    #[must_use]
    pub fn with_piece_prepended(&self, piece: PlacedElement) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.push(piece);
        elements.extend(self.elements.iter().copied());
        Self {
            id: self.id,
            elements,
        }
    }

    /// New column with the piece of the given id filtered out.
    #[must_use]
    pub fn without_piece(&self, id: ElementId) -> Self {
        Self {
            id: self.id,
            elements: self
                .elements
                .iter()
                .copied()
                .filter(|element| element.id != id)
                .collect(),
        }
    }
}

/// The ordered sequence of columns making up one shelf unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    columns: Vec<Column>,
}

impl Layout {
    /// An empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a layout from columns, e.g. when reloading a snapshot.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in left-to-right order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// True when no columns exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Lookup one column by id.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Locate a piece and the column holding it.
    #[must_use]
    pub fn find_piece(&self, id: ElementId) -> Option<(&Column, &PlacedElement)> {
        self.columns
            .iter()
            .find_map(|column| column.piece(id).map(|piece| (column, piece)))
    }

    /// Total number of placed elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.columns.iter().map(|column| column.elements.len()).sum()
    }

    /// New layout with `column` inserted at the far left.
    #[must_use]
    pub fn with_column_prepended(&self, column: Column) -> Self {
        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        columns.push(column);
        columns.extend(self.columns.iter().cloned());
        Self { columns }
    }

    /// New layout with `column` inserted at the far right.
    #[must_use]
    pub fn with_column_appended(&self, column: Column) -> Self {
        let mut columns = self.columns.clone();
        columns.push(column);
        Self { columns }
    }

    /// New layout with the column of the given id swapped for `column`.
    ///
    /// Identity when the id is absent — callers check existence first.
    #[must_use]
    pub fn with_column_replaced(&self, id: ColumnId, column: Column) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|existing| {
                    if existing.id == id {
                        column.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect(),
        }
    }

    /// New layout with the piece of the given id filtered out of whichever
    /// column holds it. Does not prune.
    #[must_use]
    pub fn without_piece(&self, id: ElementId) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|column| {
                    if column.piece(id).is_some() {
                        column.without_piece(id)
                    } else {
                        column.clone()
                    }
                })
                .collect(),
        }
    }

    /// New layout with all empty columns pruned.
    #[must_use]
    pub fn without_empty_columns(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|column| !column.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Check the structural invariants: per-column capacity and id
    /// uniqueness across the whole layout.
    pub fn check_invariants(&self) -> Result<(), LayoutError> {
        let mut column_ids = FxHashSet::default();
        let mut element_ids = FxHashSet::default();

        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(LayoutError::DuplicateColumnId { column: column.id });
            }
            let used = column.used_units();
            if used > MAX_STACK_UNITS {
                return Err(LayoutError::CapacityExceeded {
                    column: column.id,
                    used_units: used,
                });
            }
            for element in &column.elements {
                if !element_ids.insert(element.id) {
                    return Err(LayoutError::DuplicateElementId {
                        element: element.id,
                    });
                }
            }
        }
        Ok(())
    }

    /// Highest raw id present in the layout, for resuming an id minter
    /// after a reload. Zero for an empty layout.
    #[must_use]
    pub fn max_raw_id(&self) -> u64 {
        self.columns
            .iter()
            .flat_map(|column| {
                std::iter::once(column.id.get())
                    .chain(column.elements.iter().map(|element| element.id.get()))
            })
            .max()
            .unwrap_or(0)
    }
}

/// Structural invariant violation in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A column stacks more than [`MAX_STACK_UNITS`] base units.
    CapacityExceeded { column: ColumnId, used_units: u8 },
    /// A column id repeats within the layout.
    DuplicateColumnId { column: ColumnId },
    /// An element id appears more than once.
    DuplicateElementId { element: ElementId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { column, used_units } => write!(
                f,
                "column {column} stacks {used_units} units, exceeding the maximum of {MAX_STACK_UNITS}"
            ),
            Self::DuplicateColumnId { column } => {
                write!(f, "column id {column} appears more than once")
            }
            Self::DuplicateElementId { element } => {
                write!(f, "element id {element} appears more than once")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
