//! Element kinds and the static catalog of their definitions.
//!
//! The catalog is pure process-constant data: every [`ElementKind`] maps to
//! exactly one [`ElementDefinition`]. Lookup is total — an unknown kind is
//! unrepresentable because the enumeration is closed.

use serde::{Deserialize, Serialize};

/// Maximum stack height of one column, in base units.
pub const MAX_STACK_UNITS: u8 = 8;

/// Kind of physical shelf element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Short element, one base unit tall.
    Slim,
    /// Tall element, two base units tall.
    High,
}

/// Display and sizing metadata for one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDefinition {
    pub label: &'static str,
    /// Height in base units, always > 0.
    pub height_units: u8,
}

const SLIM_DEFINITION: ElementDefinition = ElementDefinition {
    label: "Short Element",
    height_units: 1,
};

const HIGH_DEFINITION: ElementDefinition = ElementDefinition {
    label: "Tall Element",
    height_units: 2,
};

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 2] = [Self::Slim, Self::High];

    /// Catalog definition for this kind. Total: every kind resolves.
    #[must_use]
    pub const fn definition(self) -> &'static ElementDefinition {
        match self {
            Self::Slim => &SLIM_DEFINITION,
            Self::High => &HIGH_DEFINITION,
        }
    }

    /// Height in base units.
    #[must_use]
    pub const fn height_units(self) -> u8 {
        self.definition().height_units
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.definition().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total() {
        for kind in ElementKind::ALL {
            let def = kind.definition();
            assert!(def.height_units > 0);
            assert!(!def.label.is_empty());
        }
    }

    #[test]
    fn observed_unit_heights() {
        assert_eq!(ElementKind::Slim.height_units(), 1);
        assert_eq!(ElementKind::High.height_units(), 2);
    }

    #[test]
    fn every_kind_fits_an_empty_column() {
        for kind in ElementKind::ALL {
            assert!(kind.height_units() <= MAX_STACK_UNITS);
        }
    }

    #[test]
    fn wire_tags_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&ElementKind::Slim).unwrap(),
            "\"slim\""
        );
        assert_eq!(
            serde_json::to_string(&ElementKind::High).unwrap(),
            "\"high\""
        );
        let back: ElementKind = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, ElementKind::High);
    }
}
