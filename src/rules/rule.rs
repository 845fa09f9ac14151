//! Style rule values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A scalar stored in a constant rule table.
///
/// Rule tables are `const` data, so they hold borrowed strings; the compiler
/// turns them into owned [`RuleValue`]s when it copies them into a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Num(f64),
    Str(&'static str),
}

/// A resolved style property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(f64),
    Text(String),
}

impl RuleValue {
    /// Returns the number, if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuleValue::Number(n) => Some(*n),
            RuleValue::Text(_) => None,
        }
    }

    /// Returns the text, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleValue::Number(_) => None,
            RuleValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for RuleValue {
    fn from(n: f64) -> Self {
        RuleValue::Number(n)
    }
}

impl From<&str> for RuleValue {
    fn from(s: &str) -> Self {
        RuleValue::Text(s.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(s: String) -> Self {
        RuleValue::Text(s)
    }
}

impl From<Scalar> for RuleValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Num(n) => RuleValue::Number(n),
            Scalar::Str(s) => RuleValue::Text(s.to_string()),
        }
    }
}

/// A flat mapping of style property names to values, e.g. `{ padding: 8 }`.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::{RuleValue, StyleRule};
///
/// let rule = StyleRule::with("backgroundColor", "#336699");
/// assert_eq!(rule.get("backgroundColor"), Some(&RuleValue::from("#336699")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRule(BTreeMap<String, RuleValue>);

impl StyleRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a rule holding a single property.
    pub fn with<V: Into<RuleValue>>(property: &str, value: V) -> Self {
        let mut rule = Self::new();
        rule.set(property, value);
        rule
    }

    /// Builds a rule from a constant table entry, copying values verbatim.
    pub fn from_static(properties: &[(&str, Scalar)]) -> Self {
        Self(
            properties
                .iter()
                .map(|(property, value)| (property.to_string(), RuleValue::from(*value)))
                .collect(),
        )
    }

    /// Sets a property, replacing any previous value.
    pub fn set<V: Into<RuleValue>>(&mut self, property: &str, value: V) {
        self.0.insert(property.to_string(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&RuleValue> {
        self.0.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
