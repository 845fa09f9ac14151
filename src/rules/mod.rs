//! The atomic style vocabulary.
//!
//! Rules come in two flavors:
//!
//! - [`StaticTable`]s hold finished rule bodies (`flx-i`, `absolute`, `b`, ...)
//!   that are copied into the sheet as-is.
//! - [`RemTable`]s hold unit-less multipliers (`pa2`, `h3`, `f1`, ...) that the
//!   compiler multiplies by the configured rem unit.
//!
//! Both are ordered slices. Order is significant: when two tables define the
//! same group name, the table that comes later in [`Vocabulary`] wins.

pub mod borders;
pub mod flexbox;
pub mod font_weights;
pub mod heights;
pub mod images;
pub mod opacity;
mod rule;
pub mod spacing;
pub mod text;
pub mod type_scale;
pub mod utilities;
pub mod widths;

pub use rule::{RuleValue, Scalar, StyleRule};

/// A named rule with literal property values.
pub type StaticGroup = (&'static str, &'static [(&'static str, Scalar)]);

/// A named rule whose property values are multiples of the rem unit.
pub type RemGroup = (&'static str, &'static [(&'static str, f64)]);

/// Ordered rule groups that need no scaling.
pub type StaticTable = &'static [StaticGroup];

/// Ordered rule groups expressed in rem multiples.
pub type RemTable = &'static [RemGroup];

/// Non-scaled tables, in merge order.
pub const STATIC_TABLES: &[StaticTable] = &[
    borders::STYLES,
    flexbox::FLEXBOX,
    font_weights::FONT_WEIGHTS,
    images::IMAGES,
    text::TEXT,
    opacity::OPACITY,
    utilities::UTILITIES,
];

/// Rem-scaled tables, in merge order.
pub const REM_TABLES: &[RemTable] = &[
    heights::HEIGHTS,
    heights::MIN_HEIGHTS,
    heights::MAX_HEIGHTS,
    widths::WIDTHS,
    widths::MIN_WIDTHS,
    widths::MAX_WIDTHS,
    spacing::SPACING,
    type_scale::TYPE_SCALE,
    borders::RADII,
];

/// The set of rule tables a compilation draws from.
///
/// [`Vocabulary::standard`] is the built-in tachyons vocabulary. Custom
/// vocabularies can swap in extra or replacement tables.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::rules::{RemTable, StaticTable, Vocabulary, Scalar};
///
/// const NUDGES: StaticTable = &[("nudge-left", &[("left", Scalar::Num(-1.0))])];
/// const GAPS: RemTable = &[("gap1", &[("gap", 0.25)])];
///
/// let vocabulary = Vocabulary::new(&[NUDGES], &[GAPS]);
/// assert_eq!(vocabulary.static_tables().len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary<'a> {
    static_tables: &'a [StaticTable],
    rem_tables: &'a [RemTable],
}

impl<'a> Vocabulary<'a> {
    pub fn new(static_tables: &'a [StaticTable], rem_tables: &'a [RemTable]) -> Self {
        Self {
            static_tables,
            rem_tables,
        }
    }

    pub fn static_tables(&self) -> &'a [StaticTable] {
        self.static_tables
    }

    pub fn rem_tables(&self) -> &'a [RemTable] {
        self.rem_tables
    }
}

impl Vocabulary<'static> {
    /// The built-in vocabulary.
    pub fn standard() -> Self {
        Self::new(STATIC_TABLES, REM_TABLES)
    }
}

impl Default for Vocabulary<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_table_counts() {
        let vocabulary = Vocabulary::standard();
        assert_eq!(vocabulary.static_tables().len(), 7);
        assert_eq!(vocabulary.rem_tables().len(), 9);
    }

    #[test]
    fn test_rem_groups_are_not_empty() {
        for table in REM_TABLES {
            for (name, properties) in table.iter() {
                assert!(!properties.is_empty(), "rem group '{}' has no properties", name);
            }
        }
    }

    #[test]
    fn test_static_groups_are_not_empty() {
        for table in STATIC_TABLES {
            for (name, properties) in table.iter() {
                assert!(!properties.is_empty(), "static group '{}' has no properties", name);
            }
        }
    }

    #[test]
    fn test_no_duplicate_names_within_a_table() {
        for table in REM_TABLES {
            let mut seen = HashSet::new();
            for (name, _) in table.iter() {
                assert!(seen.insert(*name), "duplicate rem group '{}'", name);
            }
        }
        for table in STATIC_TABLES {
            let mut seen = HashSet::new();
            for (name, _) in table.iter() {
                assert!(seen.insert(*name), "duplicate static group '{}'", name);
            }
        }
    }
}
