//! Hyphen to underscore key aliasing.

use std::collections::BTreeMap;

use log::debug;

/// Returns `source` plus an underscore-spelled alias for every hyphenated key.
///
/// `pa-2`-style names are awkward to use as identifiers, so every key with a
/// `-` is also reachable with each `-` replaced by `_`. Aliases are written
/// after the verbatim copy and therefore overwrite an existing entry with the
/// same spelling.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use tachyon_styles::hyphens_to_underscores;
///
/// let mut colors = BTreeMap::new();
/// colors.insert("light-blue".to_string(), "#96ccff".to_string());
///
/// let normalized = hyphens_to_underscores(&colors);
/// assert_eq!(normalized["light-blue"], normalized["light_blue"]);
/// ```
pub fn hyphens_to_underscores<V: Clone>(source: &BTreeMap<String, V>) -> BTreeMap<String, V> {
    let mut translated = source.clone();

    for (key, value) in source {
        if key.contains('-') {
            let alias = key.replace('-', "_");
            debug!("replacing {} -> {}", key, alias);
            translated.insert(alias, value.clone());
        }
    }

    translated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i32)]) -> BTreeMap<String, i32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_adds_underscore_alias() {
        let normalized = hyphens_to_underscores(&map(&[("min-h1", 1)]));
        assert_eq!(normalized, map(&[("min-h1", 1), ("min_h1", 1)]));
    }

    #[test]
    fn test_replaces_every_hyphen() {
        let normalized = hyphens_to_underscores(&map(&[("b--light-red", 7)]));
        assert_eq!(normalized.get("b__light_red"), Some(&7));
    }

    #[test]
    fn test_alias_overwrites_existing_underscore_key() {
        let normalized = hyphens_to_underscores(&map(&[("dark-red", 1), ("dark_red", 2)]));
        assert_eq!(normalized.get("dark_red"), Some(&1));
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn test_plain_keys_untouched() {
        let source = map(&[("pa2", 8), ("white", 0)]);
        assert_eq!(hyphens_to_underscores(&source), source);
    }

    #[test]
    fn test_empty_map() {
        assert!(hyphens_to_underscores(&BTreeMap::<String, i32>::new()).is_empty());
    }
}
