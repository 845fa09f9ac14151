//! Build configuration and default merging.
//!
//! Two shapes exist:
//!
//! - [`PartialConfig`]: what a caller supplies. Every field is optional and it
//!   deserializes from JSON or YAML.
//! - [`Config`]: the complete configuration the compiler consumes.
//!
//! Converting a partial into a [`Config`] fills every missing field from
//! [`Config::default`]. Nested maps merge key by key, so a caller palette of
//! `{ brand }` still carries the default `white` and `black` entries.
//!
//! Palettes and font maps keep declaration order. Caller entries come first,
//! followed by any default entries the caller did not name.

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Default rem unit in points.
pub const DEFAULT_REM: f64 = 16.0;

/// Default lighten and darken ratio.
pub const DEFAULT_ADJUST_RATIO: f64 = 0.2;

/// Error returned when a configuration document cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A lighten/darken setting: a ratio, or disabled.
///
/// In configuration documents this is either a number or the literal `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjust {
    Ratio(f64),
    Disabled,
}

impl Adjust {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Adjust::Ratio(ratio) => Some(*ratio),
            Adjust::Disabled => None,
        }
    }
}

impl From<f64> for Adjust {
    fn from(ratio: f64) -> Self {
        Adjust::Ratio(ratio)
    }
}

impl Serialize for Adjust {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Adjust::Ratio(ratio) => serializer.serialize_f64(*ratio),
            Adjust::Disabled => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for Adjust {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Ratio(f64),
            Flag(bool),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Ratio(ratio) => Ok(Adjust::Ratio(ratio)),
            Raw::Flag(false) => Ok(Adjust::Disabled),
            Raw::Flag(true) => Err(de::Error::custom("expected a ratio or `false`, got `true`")),
        }
    }
}

/// Color settings of a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorConfig {
    pub lighten: Adjust,
    pub darken: Adjust,
    /// Base colors by name, before tint/shade/alpha expansion.
    pub palette: IndexMap<String, String>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let mut palette = IndexMap::new();
        palette.insert("white".to_string(), "#ffffff".to_string());
        palette.insert("black".to_string(), "#000000".to_string());
        Self {
            lighten: Adjust::Ratio(DEFAULT_ADJUST_RATIO),
            darken: Adjust::Ratio(DEFAULT_ADJUST_RATIO),
            palette,
        }
    }
}

/// A complete build configuration.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::{Adjust, Config};
///
/// let config = Config::new()
///     .rem(10.0)
///     .darken(Adjust::Disabled)
///     .color("brand", "#336699")
///     .font("sans", "Helvetica");
///
/// assert_eq!(config.rem, 10.0);
/// assert!(config.colors.palette.contains_key("white"));
/// assert!(config.colors.palette.contains_key("brand"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Base unit that rem-scaled multipliers are multiplied by. Must be positive.
    pub rem: f64,
    pub colors: ColorConfig,
    /// Font families by short name.
    pub fonts: IndexMap<String, String>,
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rem(mut self, rem: f64) -> Self {
        self.rem = rem;
        self
    }

    pub fn lighten<A: Into<Adjust>>(mut self, adjust: A) -> Self {
        self.colors.lighten = adjust.into();
        self
    }

    pub fn darken<A: Into<Adjust>>(mut self, adjust: A) -> Self {
        self.colors.darken = adjust.into();
        self
    }

    /// Adds or replaces a palette color.
    pub fn color(mut self, name: &str, value: &str) -> Self {
        self.colors
            .palette
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Adds or replaces a font family.
    pub fn font(mut self, name: &str, family: &str) -> Self {
        self.fonts.insert(name.to_string(), family.to_string());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rem: DEFAULT_REM,
            colors: ColorConfig::default(),
            fonts: IndexMap::new(),
        }
    }
}

/// Caller-supplied color settings; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialColorConfig {
    pub lighten: Option<Adjust>,
    pub darken: Option<Adjust>,
    pub palette: Option<IndexMap<String, String>>,
}

/// Caller-supplied configuration; unset fields fall back to defaults.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::{Config, PartialConfig};
///
/// let partial = PartialConfig::from_yaml(
///     "colors:\n  darken: false\n  palette:\n    brand: \"#336699\"\n",
/// )
/// .unwrap();
/// let config = Config::from(partial);
///
/// assert_eq!(config.rem, 16.0);
/// assert_eq!(config.colors.palette.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(alias = "remUnit")]
    pub rem: Option<f64>,
    pub colors: Option<PartialColorConfig>,
    pub fonts: Option<IndexMap<String, String>>,
}

impl PartialConfig {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Fills every unset field from `defaults`.
    ///
    /// Scalars are taken from `self` when present. Maps keep the caller's
    /// entries in order and append the default entries that are missing.
    pub fn merge_onto(self, defaults: Config) -> Config {
        let colors = self.colors.unwrap_or_default();
        Config {
            rem: self.rem.unwrap_or(defaults.rem),
            colors: ColorConfig {
                lighten: colors.lighten.unwrap_or(defaults.colors.lighten),
                darken: colors.darken.unwrap_or(defaults.colors.darken),
                palette: merge_maps(defaults.colors.palette, colors.palette),
            },
            fonts: merge_maps(defaults.fonts, self.fonts),
        }
    }
}

impl From<PartialConfig> for Config {
    fn from(partial: PartialConfig) -> Self {
        partial.merge_onto(Config::default())
    }
}

fn merge_maps(
    defaults: IndexMap<String, String>,
    overrides: Option<IndexMap<String, String>>,
) -> IndexMap<String, String> {
    let mut merged = overrides.unwrap_or_default();
    for (key, value) in defaults {
        merged.entry(key).or_insert(value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partial_is_default() {
        let config = Config::from(PartialConfig::default());
        assert_eq!(config, Config::default());
        assert_eq!(config.rem, 16.0);
        assert_eq!(config.colors.lighten, Adjust::Ratio(0.2));
        assert_eq!(config.colors.darken, Adjust::Ratio(0.2));
        assert_eq!(config.colors.palette["white"], "#ffffff");
        assert_eq!(config.colors.palette["black"], "#000000");
        assert!(config.fonts.is_empty());
    }

    #[test]
    fn test_specified_fields_are_kept() {
        let partial = PartialConfig {
            rem: Some(10.0),
            colors: Some(PartialColorConfig {
                lighten: Some(Adjust::Disabled),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = Config::from(partial);
        assert_eq!(config.rem, 10.0);
        assert_eq!(config.colors.lighten, Adjust::Disabled);
        assert_eq!(config.colors.darken, Adjust::Ratio(0.2));
    }

    #[test]
    fn test_palette_merges_with_defaults() {
        let config = Config::from(
            PartialConfig::from_json(r##"{"colors": {"palette": {"brand": "#336699"}}}"##)
                .unwrap(),
        );
        let names: Vec<&str> = config.colors.palette.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["brand", "white", "black"]);
    }

    #[test]
    fn test_palette_override_replaces_default_value() {
        let config = Config::from(
            PartialConfig::from_json(r##"{"colors": {"palette": {"white": "#fafafa"}}}"##)
                .unwrap(),
        );
        assert_eq!(config.colors.palette["white"], "#fafafa");
        assert_eq!(config.colors.palette.len(), 2);
    }

    #[test]
    fn test_palette_keeps_declaration_order() {
        let config = Config::from(
            PartialConfig::from_json(
                r##"{"colors": {"palette": {"light-blue": "#96ccff", "blue": "#357edd"}}}"##,
            )
            .unwrap(),
        );
        let names: Vec<&str> = config.colors.palette.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["light-blue", "blue", "white", "black"]);
    }

    #[test]
    fn test_override_keeps_caller_position() {
        let config = Config::from(
            PartialConfig::from_json(r##"{"colors": {"palette": {"white": "#fafafa"}}}"##)
                .unwrap(),
        );
        let names: Vec<&str> = config.colors.palette.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["white", "black"]);
    }

    #[test]
    fn test_adjust_accepts_false() {
        let partial =
            PartialConfig::from_json(r#"{"colors": {"lighten": false, "darken": 0.5}}"#).unwrap();
        let colors = partial.colors.unwrap();
        assert_eq!(colors.lighten, Some(Adjust::Disabled));
        assert_eq!(colors.darken, Some(Adjust::Ratio(0.5)));
    }

    #[test]
    fn test_adjust_rejects_true() {
        let result = PartialConfig::from_json(r#"{"colors": {"lighten": true}}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_rem_unit_alias() {
        let partial = PartialConfig::from_json(r#"{"remUnit": 12}"#).unwrap();
        assert_eq!(partial.rem, Some(12.0));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PartialConfig::from_yaml("spacing: 4\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_fonts() {
        let partial = PartialConfig::from_yaml("fonts:\n  sans: Helvetica\n").unwrap();
        let config = Config::from(partial);
        assert_eq!(config.fonts["sans"], "Helvetica");
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .rem(8.0)
            .lighten(0.1)
            .darken(Adjust::Disabled)
            .color("brand", "#336699")
            .font("mono", "Menlo");
        assert_eq!(config.rem, 8.0);
        assert_eq!(config.colors.lighten.ratio(), Some(0.1));
        assert_eq!(config.colors.darken.ratio(), None);
        assert_eq!(config.colors.palette.len(), 3);
        assert_eq!(config.fonts["mono"], "Menlo");
    }

    #[test]
    fn test_adjust_serializes_like_config_documents() {
        assert_eq!(serde_json::to_string(&Adjust::Disabled).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Adjust::Ratio(0.2)).unwrap(), "0.2");
    }

    #[test]
    fn test_config_error_display() {
        let err = PartialConfig::from_json("{").unwrap_err();
        assert!(err.to_string().contains("invalid JSON configuration"));
    }
}
