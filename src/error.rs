//! Build errors.

use crate::color::ColorError;

/// Error returned when a build fails.
///
/// Failures from the color primitive and the style factory are passed through
/// unchanged as the error source.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A palette entry is not a parseable color.
    #[error("palette entry '{name}' is not a valid color")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorError,
    },
    /// The style factory rejected the compiled sheet.
    #[error("style factory failed to materialize the sheet")]
    Materialize(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
