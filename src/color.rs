//! Color math used by the palette expander.
//!
//! [`Color`] parses any CSS color string, adjusts lightness in HSL space and
//! formats the result back as a hex or `rgba(...)` string.

use std::str::FromStr;

/// Error returned when a string is not a parseable color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{input}' as a color: {reason}")]
pub struct ColorError {
    pub input: String,
    pub reason: String,
}

/// An sRGB color with 8-bit channels and a fractional alpha.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::Color;
///
/// let gray = Color::parse("#ffffff").unwrap().darken(0.2);
/// assert_eq!(gray.to_hex_string(), "#CCCCCC");
///
/// let faded = Color::parse("#336699").unwrap().with_alpha(0.5);
/// assert_eq!(faded.to_rgba_string(), "rgba(51, 102, 153, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Color {
    /// Creates an opaque color from its channels.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Parses a CSS color: hex forms, named colors and functional notations.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let parsed: csscolorparser::Color = input.parse().map_err(
            |err: csscolorparser::ParseColorError| ColorError {
                input: input.to_string(),
                reason: err.to_string(),
            },
        )?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Ok(Self {
            red,
            green,
            blue,
            alpha: alpha as f64 / 255.0,
        })
    }

    /// Returns the channels as an `(r, g, b)` triplet.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Raises HSL lightness by `ratio` of its current value.
    ///
    /// Black has zero lightness and therefore stays black.
    pub fn lighten(&self, ratio: f64) -> Self {
        let (hue, saturation, lightness) = self.to_hsl();
        self.with_hsl(hue, saturation, lightness + lightness * ratio)
    }

    /// Lowers HSL lightness by `ratio` of its current value.
    pub fn darken(&self, ratio: f64) -> Self {
        let (hue, saturation, lightness) = self.to_hsl();
        self.with_hsl(hue, saturation, lightness - lightness * ratio)
    }

    /// Returns the same color with its alpha replaced, clamped to `[0, 1]`.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Formats as uppercase `#RRGGBB`. Alpha is dropped.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Formats as `rgba(r, g, b, a)`.
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    /// Hue in whole degrees, saturation and lightness in whole percent.
    ///
    /// Components are rounded before any adjustment is applied, so lightened
    /// and darkened colors land on the same channels as CSS tooling that works
    /// in integer HSL. That rounding is why the conversion is done here rather
    /// than through `csscolorparser`'s float HSL helpers.
    fn to_hsl(&self) -> (f64, f64, f64) {
        let r = self.red as f64 / 255.0;
        let g = self.green as f64 / 255.0;
        let b = self.blue as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, (lightness * 100.0).round());
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (
            (hue * 60.0).round(),
            (saturation * 100.0).round(),
            (lightness * 100.0).round(),
        )
    }

    /// Takes hue in degrees, saturation and lightness in percent.
    fn with_hsl(&self, hue: f64, saturation: f64, lightness: f64) -> Self {
        let lightness = lightness.clamp(0.0, 100.0) / 100.0;
        let saturation = saturation.clamp(0.0, 100.0) / 100.0;

        if saturation == 0.0 {
            let gray = to_channel(lightness);
            return Self {
                red: gray,
                green: gray,
                blue: gray,
                alpha: self.alpha,
            };
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;
        let h = hue / 360.0;

        Self {
            red: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            green: to_channel(hue_to_rgb(p, q, h)),
            blue: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
            alpha: self.alpha,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
