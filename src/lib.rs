//! # Tachyon Styles - atomic style sheets from a handful of settings
//!
//! Tachyon Styles compiles a rem-relative atomic style vocabulary (`pa2`,
//! `f3`, `flx-i`, `bg-light-blue`, ...) into resolved style tables for a UI
//! renderer. You supply a base unit, a palette and some fonts; you get back
//! three flat maps:
//!
//! - **sizes**: rule group name to resolved size (`pa2` -> `8.0`)
//! - **colors**: palette names and their generated variants (`light-brand`,
//!   `dark-brand`, `brand-10` .. `brand-90`)
//! - **styles**: every rule name to its rule body, materialized by a
//!   [`StyleFactory`] of your choice
//!
//! Every hyphenated name is also available with underscores (`bg_light_brand`).
//!
//! ## Quick Start
//!
//! ```rust
//! use tachyon_styles::{Config, RuleFactory, StyleRule, Tachyons};
//!
//! let mut tachyons = Tachyons::new();
//! tachyons
//!     .build(
//!         Config::new().rem(10.0).color("brand", "#336699").font("sans", "Helvetica"),
//!         &RuleFactory,
//!     )
//!     .unwrap();
//!
//! assert_eq!(tachyons.size("pa3"), Some(10.0));
//! assert_eq!(tachyons.color("dark_brand"), tachyons.color("dark-brand"));
//! assert_eq!(
//!     tachyons.style("ff-sans"),
//!     Some(&StyleRule::with("fontFamily", "Helvetica"))
//! );
//! ```
//!
//! ## Configuration
//!
//! [`Config`] is the complete configuration. [`PartialConfig`] is what callers
//! usually write: any subset of fields, loadable from JSON or YAML, with the
//! rest filled from the defaults (`rem: 16`, `lighten: 0.2`, `darken: 0.2`,
//! a `white`/`black` palette, no fonts). Set `lighten` or `darken` to `false`
//! to skip that variant.
//!
//! ```yaml
//! rem: 10
//! colors:
//!   darken: false
//!   palette:
//!     brand: "#336699"
//! fonts:
//!   sans: Helvetica
//! ```
//!
//! ## Compiling Without Accumulating
//!
//! [`compile`] is a pure function returning a [`Compiled`] value. [`Tachyons`]
//! wraps it and merges the results of successive builds.

pub mod color;
pub mod compile;
pub mod config;
pub mod error;
pub mod factory;
pub mod registry;
pub mod rules;

pub use color::{Color, ColorError};
pub use compile::{compile, compile_with, hyphens_to_underscores, Compiled, StyleSheet};
pub use config::{Adjust, ColorConfig, Config, ConfigError, PartialColorConfig, PartialConfig};
pub use error::BuildError;
pub use factory::{JsonFactory, RuleFactory, StyleFactory};
pub use registry::Tachyons;
pub use rules::{RuleValue, StyleRule, Vocabulary};
