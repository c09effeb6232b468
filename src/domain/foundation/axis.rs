//! Axis enum: the seven measured preference dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an axis drives the value-type classification or the provider ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisGroup {
    Core,
    Support,
}

/// A preference axis. Declaration order is the canonical catalog order and
/// is used to break ties everywhere axes are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Axis {
    Cost,
    Perf,
    Design,
    Life,
    Flex,
    Involve,
    Assure,
}

impl Axis {
    /// Returns all axes in canonical order (core first).
    pub fn all() -> &'static [Axis] {
        &[
            Axis::Cost,
            Axis::Perf,
            Axis::Design,
            Axis::Life,
            Axis::Flex,
            Axis::Involve,
            Axis::Assure,
        ]
    }

    /// Returns the five core axes in canonical order.
    pub fn core() -> &'static [Axis] {
        &Self::all()[..5]
    }

    /// Returns the two support axes in canonical order.
    pub fn support() -> &'static [Axis] {
        &Self::all()[5..]
    }

    /// Returns the 0-based index of this axis in the canonical order.
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    pub fn group(&self) -> AxisGroup {
        match self {
            Axis::Involve | Axis::Assure => AxisGroup::Support,
            _ => AxisGroup::Core,
        }
    }

    pub fn is_core(&self) -> bool {
        self.group() == AxisGroup::Core
    }

    /// Returns the catalog identifier (e.g. `COST`).
    pub fn code(&self) -> &'static str {
        match self {
            Axis::Cost => "COST",
            Axis::Perf => "PERF",
            Axis::Design => "DESIGN",
            Axis::Life => "LIFE",
            Axis::Flex => "FLEX",
            Axis::Involve => "INVOLVE",
            Axis::Assure => "ASSURE",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_7_axes() {
        assert_eq!(Axis::all().len(), 7);
    }

    #[test]
    fn core_and_support_partition_all() {
        assert_eq!(
            Axis::core(),
            &[Axis::Cost, Axis::Perf, Axis::Design, Axis::Life, Axis::Flex]
        );
        assert_eq!(Axis::support(), &[Axis::Involve, Axis::Assure]);
        assert!(Axis::core().iter().all(|a| a.is_core()));
        assert!(Axis::support().iter().all(|a| !a.is_core()));
    }

    #[test]
    fn order_index_matches_position() {
        for (idx, axis) in Axis::all().iter().enumerate() {
            assert_eq!(axis.order_index(), idx);
        }
    }

    #[test]
    fn ordering_follows_declaration() {
        assert!(Axis::Cost < Axis::Perf);
        assert!(Axis::Flex < Axis::Involve);
    }

    #[test]
    fn serializes_as_catalog_code() {
        assert_eq!(serde_json::to_string(&Axis::Involve).unwrap(), "\"INVOLVE\"");
        let axis: Axis = serde_json::from_str("\"DESIGN\"").unwrap();
        assert_eq!(axis, Axis::Design);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", Axis::Perf), "PERF");
    }
}
