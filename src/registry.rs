//! Accumulated build output.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::compile::{compile_with, Compiled};
use crate::config::Config;
use crate::error::BuildError;
use crate::factory::StyleFactory;
use crate::rules::{StyleRule, Vocabulary};

/// Sizes, colors and styles accumulated over one or more builds.
///
/// Each build merges its output into the existing maps: colliding keys are
/// overwritten and nothing is ever removed. Builds need `&mut self`, so two
/// builds can never interleave on the same registry.
///
/// # Example
///
/// ```rust
/// use tachyon_styles::{Config, RuleFactory, StyleRule, Tachyons};
///
/// let mut tachyons = Tachyons::new();
/// tachyons.build(Config::new().color("brand", "#336699"), &RuleFactory).unwrap();
///
/// assert_eq!(tachyons.size("pa2"), Some(8.0));
/// assert_eq!(tachyons.color("brand"), Some("#336699"));
/// assert_eq!(
///     tachyons.style("bg-brand"),
///     Some(&StyleRule::with("backgroundColor", "#336699"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tachyons<H = StyleRule> {
    sizes: BTreeMap<String, f64>,
    colors: BTreeMap<String, String>,
    styles: BTreeMap<String, H>,
}

impl<H> Tachyons<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            sizes: BTreeMap::new(),
            colors: BTreeMap::new(),
            styles: BTreeMap::new(),
        }
    }

    /// Merges defaults into `config`, compiles it and commits the result.
    ///
    /// Accepts a [`Config`] or a [`PartialConfig`](crate::PartialConfig).
    ///
    /// # Errors
    ///
    /// An invalid palette color fails before anything is committed. A factory
    /// failure leaves this build's sizes and colors committed.
    pub fn build<C, F>(&mut self, config: C, factory: &F) -> Result<(), BuildError>
    where
        C: Into<Config>,
        F: StyleFactory<Handle = H>,
    {
        self.build_with(config, &Vocabulary::standard(), factory)
    }

    /// Like [`build`](Self::build), drawing rules from a custom vocabulary.
    pub fn build_with<C, F>(
        &mut self,
        config: C,
        vocabulary: &Vocabulary<'_>,
        factory: &F,
    ) -> Result<(), BuildError>
    where
        C: Into<Config>,
        F: StyleFactory<Handle = H>,
    {
        let compiled = compile_with(&config.into(), vocabulary)?;
        self.commit(compiled, factory)
    }

    /// Merges a compiled result into this registry.
    ///
    /// Sizes and colors are merged first, then the sheet is handed to
    /// `factory` and its handles are merged into the styles.
    pub fn commit<F>(&mut self, compiled: Compiled, factory: &F) -> Result<(), BuildError>
    where
        F: StyleFactory<Handle = H>,
    {
        let Compiled {
            sizes,
            colors,
            sheet,
        } = compiled;

        self.sizes.extend(sizes);
        self.colors.extend(colors);

        let handles = factory
            .create(&sheet)
            .map_err(|err| BuildError::Materialize(Box::new(err)))?;
        debug!("committing {} styles", handles.len());
        self.styles.extend(handles);

        Ok(())
    }

    pub fn sizes(&self) -> &BTreeMap<String, f64> {
        &self.sizes
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn styles(&self) -> &BTreeMap<String, H> {
        &self.styles
    }

    pub fn size(&self, name: &str) -> Option<f64> {
        self.sizes.get(name).copied()
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|c| c.as_str())
    }

    pub fn style(&self, name: &str) -> Option<&H> {
        self.styles.get(name)
    }

    /// Returns true if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty() && self.styles.is_empty()
    }
}

impl<H> Default for Tachyons<H> {
    fn default() -> Self {
        Self::new()
    }
}
