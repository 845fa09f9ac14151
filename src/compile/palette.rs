//! Palette expansion into tints, shades and alpha variants.

use std::collections::BTreeMap;

use log::debug;

use crate::color::Color;
use crate::config::ColorConfig;
use crate::error::BuildError;

/// Alpha percentages generated for each palette color: 10, 20, ..., 90.
pub const ALPHA_STEPS: [u32; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// Expands every palette entry into its color variants.
///
/// For a base color `name` this yields:
///
/// - `name`: the base color string, verbatim
/// - `light-name`: lightened hex string, unless lightening is disabled
/// - `dark-name`: darkened hex string, unless darkening is disabled
/// - `name-10` through `name-90`: `rgba(...)` strings at 10% alpha steps
///
/// Entries expand in palette order, so when one entry's name is another
/// entry's generated variant (`light-blue` next to `blue`), the entry declared
/// later wins.
///
/// # Errors
///
/// Returns [`BuildError::InvalidColor`] for the first palette entry that is
/// not a parseable color.
pub fn expand_palette(colors: &ColorConfig) -> Result<BTreeMap<String, String>, BuildError> {
    let mut expanded = BTreeMap::new();

    for (name, value) in &colors.palette {
        let base = Color::parse(value).map_err(|source| BuildError::InvalidColor {
            name: name.clone(),
            source,
        })?;

        expanded.insert(name.clone(), value.clone());

        if let Some(ratio) = colors.lighten.ratio() {
            expanded.insert(format!("light-{}", name), base.lighten(ratio).to_hex_string());
        }
        if let Some(ratio) = colors.darken.ratio() {
            expanded.insert(format!("dark-{}", name), base.darken(ratio).to_hex_string());
        }

        for percent in ALPHA_STEPS {
            let variant = format!("{}-{}", name, percent);
            let rgba = base.with_alpha(percent as f64 / 100.0).to_rgba_string();
            debug!("writing alpha variant: {}: {}", variant, rgba);
            expanded.insert(variant, rgba);
        }
    }

    Ok(expanded)
}
