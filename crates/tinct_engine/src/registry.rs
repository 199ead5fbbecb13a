//! Pattern registries.
//!
//! A [`Registry`] is an immutable value: registering a pattern returns a
//! new registry. [`SharedRegistry`] publishes one through an atomic swap so
//! extensions can register late while renders keep iterating the snapshot
//! they loaded.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tinct_color::{ColorPattern, ColorPipeline, DEFAULT_MARKER};

use crate::format::{FormatPattern, FormatPipeline};

/// The ordered color and format patterns used by an engine.
#[derive(Clone, Debug)]
pub struct Registry {
    color: ColorPipeline,
    format: FormatPipeline,
}

impl Registry {
    /// Creates a registry from explicit pipelines.
    #[must_use]
    pub fn new(color: ColorPipeline, format: FormatPipeline) -> Self {
        Self { color, format }
    }

    /// The default patterns, with gradients and classic codes keyed on
    /// `marker`.
    #[must_use]
    pub fn with_marker(marker: char) -> Self {
        let color = ColorPipeline::empty()
            .push(ColorPattern::Gradient { marker })
            .push(ColorPattern::Hex)
            .push(ColorPattern::Classic { marker });
        Self::new(color, FormatPipeline::default())
    }

    /// Returns a registry with `pattern` appended to the color pipeline.
    #[must_use]
    pub fn with_color_pattern(&self, pattern: ColorPattern) -> Self {
        Self {
            color: self.color.push(pattern),
            format: self.format.clone(),
        }
    }

    /// Returns a registry with `pattern` appended to the format pipeline.
    #[must_use]
    pub fn with_format_pattern(&self, pattern: FormatPattern) -> Self {
        Self {
            color: self.color.clone(),
            format: self.format.push(pattern),
        }
    }

    /// Returns a registry with `pattern` placed before the built-in format
    /// patterns.
    #[must_use]
    pub fn with_leading_format_pattern(&self, pattern: FormatPattern) -> Self {
        Self {
            color: self.color.clone(),
            format: self.format.push_front(pattern),
        }
    }

    /// The color pipeline.
    #[must_use]
    pub fn color(&self) -> &ColorPipeline {
        &self.color
    }

    /// The format pipeline.
    #[must_use]
    pub fn format(&self) -> &FormatPipeline {
        &self.format
    }
}

impl Default for Registry {
    /// `[Gradient, Hex, Classic('&')]` and `[StatusBar, RecipientTarget]`.
    fn default() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }
}

/// A registry that can be replaced while renders are running.
#[derive(Debug)]
pub struct SharedRegistry {
    inner: ArcSwap<Registry>,
}

impl SharedRegistry {
    /// Publishes `registry`.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: ArcSwap::from_pointee(registry),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn load(&self) -> Arc<Registry> {
        self.inner.load_full()
    }

    /// Replaces the whole registry.
    pub fn store(&self, registry: Registry) {
        self.inner.store(Arc::new(registry));
    }

    /// Appends a color pattern.
    pub fn register_color(&self, pattern: ColorPattern) {
        tracing::debug!(pattern = pattern.name(), "registering color pattern");
        self.inner
            .rcu(|current| current.with_color_pattern(pattern.clone()));
    }

    /// Appends a format pattern.
    pub fn register_format(&self, pattern: FormatPattern) {
        tracing::debug!(pattern = pattern.name(), "registering format pattern");
        self.inner
            .rcu(|current| current.with_format_pattern(pattern.clone()));
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}
