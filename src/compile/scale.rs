//! Static aggregation and rem scaling.

use std::collections::BTreeMap;

use super::StyleSheet;
use crate::rules::{RemTable, StaticTable, StyleRule};

/// Copies every group of every table into `sheet`, in table order.
pub fn aggregate_static(sheet: &mut StyleSheet, tables: &[StaticTable]) {
    for table in tables {
        for (name, properties) in table.iter() {
            sheet.insert(name.to_string(), StyleRule::from_static(properties));
        }
    }
}

/// Multiplies every rem multiplier by `rem` and writes the result into `sheet`.
///
/// Returns the flat size map: one entry per group, holding the scaled value
/// of the group's last property. Multi-property groups such as `br--top`
/// therefore keep only one size.
pub fn scale_rem(sheet: &mut StyleSheet, tables: &[RemTable], rem: f64) -> BTreeMap<String, f64> {
    let mut sizes = BTreeMap::new();

    for table in tables {
        for (name, properties) in table.iter() {
            let mut rule = StyleRule::new();
            for (property, multiplier) in properties.iter() {
                let value = multiplier * rem;
                rule.set(property, value);
                sizes.insert(name.to_string(), value);
            }
            sheet.insert(name.to_string(), rule);
        }
    }

    sizes
}
