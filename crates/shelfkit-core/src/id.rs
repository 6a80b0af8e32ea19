//! Stable identifiers for placed elements and columns.
//!
//! Ids are minted once, at the moment a piece or column materializes, and are
//! never reused after removal. The [`IdMinter`] hands out strictly increasing
//! values, which makes the no-reuse guarantee structural rather than
//! something callers must remember to enforce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a placed shelf element.
///
/// `0` is reserved/invalid so ids are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

/// Stable identifier for a column within a layout.
///
/// `0` is reserved/invalid so ids are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(u64);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Lowest valid id.
            pub const MIN: Self = Self(1);

            /// Create a new id, rejecting 0.
            pub fn new(raw: u64) -> Result<Self, IdError> {
                if raw == 0 {
                    return Err(IdError::Zero);
                }
                Ok(Self(raw))
            }

            /// Get the raw numeric value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id!(ElementId);
impl_id!(ColumnId);

/// Failure constructing or advancing an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// `0` is the reserved invalid id.
    Zero,
    /// The minter's counter ran out of `u64` space.
    Exhausted,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "id 0 is reserved"),
            Self::Exhausted => write!(f, "id space exhausted"),
        }
    }
}

impl std::error::Error for IdError {}

/// Monotonic id source shared by element and column minting.
///
/// Both id kinds draw from one counter; a value handed out as an element id
/// is never handed out again as a column id, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdMinter {
    next: u64,
}

impl IdMinter {
    /// Start minting from the lowest valid id.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume minting above every id already present in reloaded state.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self {
            next: if next == 0 { 1 } else { next },
        }
    }

    /// Mint a fresh element id.
    pub fn element_id(&mut self) -> Result<ElementId, IdError> {
        ElementId::new(self.advance()?)
    }

    /// Mint a fresh column id.
    pub fn column_id(&mut self) -> Result<ColumnId, IdError> {
        ColumnId::new(self.advance()?)
    }

    fn advance(&mut self) -> Result<u64, IdError> {
        let current = self.next;
        let Some(next) = current.checked_add(1) else {
            return Err(IdError::Exhausted);
        };
        self.next = next;
        Ok(current)
    }
}

impl Default for IdMinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_rejected() {
        assert_eq!(ElementId::new(0), Err(IdError::Zero));
        assert_eq!(ColumnId::new(0), Err(IdError::Zero));
    }

    #[test]
    fn minter_is_strictly_increasing() {
        let mut minter = IdMinter::new();
        let a = minter.element_id().unwrap();
        let b = minter.column_id().unwrap();
        let c = minter.element_id().unwrap();
        assert!(a.get() < b.get());
        assert!(b.get() < c.get());
    }

    #[test]
    fn minter_resumes_above_reloaded_ids() {
        let mut minter = IdMinter::starting_at(42);
        assert_eq!(minter.element_id().unwrap().get(), 42);
    }

    #[test]
    fn minter_exhaustion_is_an_error() {
        let mut minter = IdMinter::starting_at(u64::MAX);
        assert_eq!(minter.element_id(), Err(IdError::Exhausted));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ElementId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: ElementId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
