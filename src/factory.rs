//! Style factories turn a compiled sheet into renderer-specific handles.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::compile::StyleSheet;
use crate::rules::StyleRule;

/// Materializes a compiled [`StyleSheet`] for a rendering target.
///
/// The returned map must hold one handle per sheet entry, under the same key.
/// Implementations should be deterministic; a build may call the factory once
/// per invocation.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use std::convert::Infallible;
/// use tachyon_styles::{StyleFactory, StyleSheet};
///
/// /// Counts properties instead of keeping them.
/// struct PropertyCount;
///
/// impl StyleFactory for PropertyCount {
///     type Handle = usize;
///     type Error = Infallible;
///
///     fn create(&self, sheet: &StyleSheet) -> Result<BTreeMap<String, usize>, Infallible> {
///         Ok(sheet.iter().map(|(name, rule)| (name.clone(), rule.len())).collect())
///     }
/// }
/// ```
pub trait StyleFactory {
    type Handle;
    type Error: std::error::Error + Send + Sync + 'static;

    fn create(&self, sheet: &StyleSheet) -> Result<BTreeMap<String, Self::Handle>, Self::Error>;
}

/// Keeps every rule as a [`StyleRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFactory;

impl StyleFactory for RuleFactory {
    type Handle = StyleRule;
    type Error = Infallible;

    fn create(&self, sheet: &StyleSheet) -> Result<BTreeMap<String, StyleRule>, Infallible> {
        Ok(sheet.clone())
    }
}

/// Converts every rule into a JSON object, for renderers fed over a bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFactory;

impl StyleFactory for JsonFactory {
    type Handle = serde_json::Value;
    type Error = serde_json::Error;

    fn create(
        &self,
        sheet: &StyleSheet,
    ) -> Result<BTreeMap<String, serde_json::Value>, serde_json::Error> {
        sheet
            .iter()
            .map(|(name, rule)| serde_json::to_value(rule).map(|value| (name.clone(), value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sheet() -> StyleSheet {
        let mut sheet = StyleSheet::new();
        sheet.insert("pa2".to_string(), StyleRule::with("padding", 8.0));
        sheet.insert("bg-white".to_string(), StyleRule::with("backgroundColor", "#fff"));
        sheet
    }

    #[test]
    fn test_rule_factory_is_identity() {
        let handles = RuleFactory.create(&sheet()).unwrap();
        assert_eq!(handles, sheet());
    }

    #[test]
    fn test_json_factory_keeps_keys() {
        let handles = JsonFactory.create(&sheet()).unwrap();
        assert_eq!(handles.len(), 2);
        assert_eq!(handles["pa2"], json!({ "padding": 8.0 }));
        assert_eq!(handles["bg-white"], json!({ "backgroundColor": "#fff" }));
    }
}
