//! Color pattern dispatch and the ordered pipeline.

use std::fmt;
use std::sync::Arc;

use im::Vector;
use tinct_foundation::escape;

use crate::gradient::apply_gradients;
use crate::hex::apply_hex;

/// The default author-facing style marker.
pub const DEFAULT_MARKER: char = '&';

/// A user-supplied color transform.
///
/// Closures of the shape `Fn(&str, bool) -> String` implement this
/// automatically.
pub trait ColorTransform: Send + Sync {
    /// Transforms `text`; `simple` enables short-form markup.
    fn process(&self, text: &str, simple: bool) -> String;

    /// Name used in logs and `Debug` output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ColorTransform for F
where
    F: Fn(&str, bool) -> String + Send + Sync,
{
    fn process(&self, text: &str, simple: bool) -> String {
        self(text, simple)
    }
}

/// One step of the color pipeline.
#[derive(Clone)]
pub enum ColorPattern {
    /// `<#RRGGBB text #RRGGBB>` gradients.
    Gradient {
        /// Marker whose style pairs are skipped when counting steps.
        marker: char,
    },
    /// `#RRGGBB` / `#RGB` colors.
    Hex,
    /// `&` + code legacy styles.
    Classic {
        /// The author-facing marker converted to the internal escape.
        marker: char,
    },
    /// A registered extension.
    Custom(Arc<dyn ColorTransform>),
}

impl ColorPattern {
    /// A gradient pattern using the default marker.
    #[must_use]
    pub const fn gradient() -> Self {
        Self::Gradient {
            marker: DEFAULT_MARKER,
        }
    }

    /// A classic pattern using the default marker.
    #[must_use]
    pub const fn classic() -> Self {
        Self::Classic {
            marker: DEFAULT_MARKER,
        }
    }

    /// Wraps a custom transform.
    #[must_use]
    pub fn custom(transform: impl ColorTransform + 'static) -> Self {
        Self::Custom(Arc::new(transform))
    }

    /// Applies this pattern to `text`.
    #[must_use]
    pub fn process(&self, text: &str, simple: bool) -> String {
        match self {
            Self::Gradient { marker } => apply_gradients(text, simple, *marker),
            Self::Hex => apply_hex(text, simple),
            Self::Classic { marker } => escape(*marker, text),
            Self::Custom(transform) => transform.process(text, simple),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Gradient { .. } => "gradient",
            Self::Hex => "hex",
            Self::Classic { .. } => "classic",
            Self::Custom(transform) => transform.name(),
        }
    }
}

impl fmt::Debug for ColorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient { marker } => f.debug_struct("Gradient").field("marker", marker).finish(),
            Self::Hex => f.write_str("Hex"),
            Self::Classic { marker } => f.debug_struct("Classic").field("marker", marker).finish(),
            Self::Custom(transform) => f.debug_tuple("Custom").field(&transform.name()).finish(),
        }
    }
}

/// An ordered list of color patterns.
///
/// Cloning is cheap; the list is a persistent vector, and [`push`] returns
/// a new pipeline without touching the original.
///
/// [`push`]: ColorPipeline::push
#[derive(Clone, Debug)]
pub struct ColorPipeline {
    patterns: Vector<ColorPattern>,
}

impl ColorPipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: Vector::new(),
        }
    }

    /// Returns a pipeline with `pattern` appended.
    #[must_use]
    pub fn push(&self, pattern: ColorPattern) -> Self {
        let mut patterns = self.patterns.clone();
        patterns.push_back(pattern);
        Self { patterns }
    }

    /// Returns a pipeline with `pattern` placed first.
    #[must_use]
    pub fn push_front(&self, pattern: ColorPattern) -> Self {
        let mut patterns = self.patterns.clone();
        patterns.push_front(pattern);
        Self { patterns }
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no pattern is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterates the patterns in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorPattern> {
        self.patterns.iter()
    }

    /// Runs every pattern in order, feeding each one's output to the next.
    #[must_use]
    pub fn apply(&self, text: &str, simple: bool) -> String {
        let mut out = text.to_string();
        for pattern in &self.patterns {
            out = pattern.process(&out, simple);
            tracing::trace!(pattern = pattern.name(), "applied color pattern");
        }
        out
    }
}

impl Default for ColorPipeline {
    /// Gradient, then hex, then classic `&` codes.
    fn default() -> Self {
        Self::empty()
            .push(ColorPattern::gradient())
            .push(ColorPattern::Hex)
            .push(ColorPattern::classic())
    }
}

impl FromIterator<ColorPattern> for ColorPipeline {
    fn from_iter<T: IntoIterator<Item = ColorPattern>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
