//! Compilation of a configuration into sizes, colors and a style sheet.
//!
//! The pipeline runs in a fixed order, and later steps overwrite entries
//! written by earlier ones:
//!
//! 1. Static tables are copied into the working sheet
//! 2. Rem tables are scaled into the sheet and the flat size map
//! 3. The palette is expanded into tints, shades and alpha variants
//! 4. Every expanded color yields background, text and border rules
//! 5. Every font yields an `ff-` rule
//! 6. All three maps get underscore aliases for hyphenated keys
//!
//! Compilation is pure. Accumulating results across builds is the job of
//! [`Tachyons`](crate::Tachyons).

mod normalize;
mod palette;
mod scale;
mod synth;

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::config::Config;
use crate::error::BuildError;
use crate::rules::{StyleRule, Vocabulary};

pub use normalize::hyphens_to_underscores;
pub use palette::{expand_palette, ALPHA_STEPS};
pub use scale::{aggregate_static, scale_rem};
pub use synth::{color_rules, font_rules};

/// Style rules by name.
pub type StyleSheet = BTreeMap<String, StyleRule>;

/// The result of one compilation, with underscore aliases already applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Compiled {
    /// Resolved sizes by rule group name.
    pub sizes: BTreeMap<String, f64>,
    /// Expanded colors by name.
    pub colors: BTreeMap<String, String>,
    /// Every rule in the vocabulary plus the synthesized color and font rules.
    pub sheet: StyleSheet,
}

/// Compiles `config` against the built-in vocabulary.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::{compile, Config, StyleRule};
///
/// let compiled = compile(&Config::new().rem(10.0).font("sans", "Helvetica")).unwrap();
///
/// assert_eq!(compiled.sizes["pa3"], 10.0);
/// assert_eq!(compiled.sheet["ff-sans"], StyleRule::with("fontFamily", "Helvetica"));
/// assert_eq!(compiled.colors["light_white"], compiled.colors["light-white"]);
/// ```
///
/// # Errors
///
/// Returns [`BuildError::InvalidColor`] if a palette entry cannot be parsed.
pub fn compile(config: &Config) -> Result<Compiled, BuildError> {
    compile_with(config, &Vocabulary::standard())
}

/// Compiles `config` against a custom vocabulary.
pub fn compile_with(config: &Config, vocabulary: &Vocabulary<'_>) -> Result<Compiled, BuildError> {
    if !rem_is_positive(config.rem) {
        warn!("rem unit should be positive, got {}", config.rem);
    }

    let mut sheet = StyleSheet::new();
    aggregate_static(&mut sheet, vocabulary.static_tables());

    let sizes = scale_rem(&mut sheet, vocabulary.rem_tables(), config.rem);
    debug!("got {} sizes at rem {}", sizes.len(), config.rem);

    let colors = expand_palette(&config.colors)?;
    color_rules(&mut sheet, &colors);
    font_rules(&mut sheet, &config.fonts);

    Ok(Compiled {
        sizes: hyphens_to_underscores(&sizes),
        colors: hyphens_to_underscores(&colors),
        sheet: hyphens_to_underscores(&sheet),
    })
}

/// False for zero, negative and NaN units.
fn rem_is_positive(rem: f64) -> bool {
    rem > 0.0
}
