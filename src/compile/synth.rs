//! Color and font rule synthesis.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::StyleSheet;
use crate::rules::StyleRule;

/// Emits `bg-<key>`, `<key>` and `b--<key>` rules for every expanded color.
pub fn color_rules(sheet: &mut StyleSheet, colors: &BTreeMap<String, String>) {
    for (key, value) in colors {
        sheet.insert(
            format!("bg-{}", key),
            StyleRule::with("backgroundColor", value.as_str()),
        );
        sheet.insert(key.clone(), StyleRule::with("color", value.as_str()));
        sheet.insert(
            format!("b--{}", key),
            StyleRule::with("borderColor", value.as_str()),
        );
    }
}

/// Emits an `ff-<key>` rule for every configured font family.
pub fn font_rules(sheet: &mut StyleSheet, fonts: &IndexMap<String, String>) {
    for (key, family) in fonts {
        sheet.insert(
            format!("ff-{}", key),
            StyleRule::with("fontFamily", family.as_str()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_three_rules_per_color() {
        let mut sheet = StyleSheet::new();
        color_rules(&mut sheet, &entries(&[("light-brand", "#3D7AB8")]));

        assert_eq!(sheet.len(), 3);
        assert_eq!(
            sheet["bg-light-brand"],
            StyleRule::with("backgroundColor", "#3D7AB8")
        );
        assert_eq!(sheet["light-brand"], StyleRule::with("color", "#3D7AB8"));
        assert_eq!(
            sheet["b--light-brand"],
            StyleRule::with("borderColor", "#3D7AB8")
        );
    }

    #[test]
    fn test_color_rule_overwrites_static_rule() {
        let mut sheet = StyleSheet::new();
        sheet.insert("white".to_string(), StyleRule::with("opacity", 1.0));
        color_rules(&mut sheet, &entries(&[("white", "#ffffff")]));
        assert_eq!(sheet["white"], StyleRule::with("color", "#ffffff"));
    }

    #[test]
    fn test_font_rule() {
        let mut sheet = StyleSheet::new();
        let fonts: IndexMap<String, String> =
            entries(&[("sans", "Helvetica")]).into_iter().collect();
        font_rules(&mut sheet, &fonts);
        assert_eq!(sheet["ff-sans"], StyleRule::with("fontFamily", "Helvetica"));
    }

    #[test]
    fn test_no_fonts_no_rules() {
        let mut sheet = StyleSheet::new();
        font_rules(&mut sheet, &IndexMap::new());
        assert!(sheet.is_empty());
    }
}
