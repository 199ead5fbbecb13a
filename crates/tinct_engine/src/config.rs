//! Engine configuration.

use tinct_color::DEFAULT_MARKER;

/// Configuration shared by every render and send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Enables three-digit hex and gradient forms.
    pub simple_mode: bool,

    /// The author-facing style marker.
    pub marker: char,

    /// Compile event markup in segments bound for interactive recipients.
    /// When off, those segments are sent as plain lines.
    pub event_patterns: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simple_mode: true,
            marker: DEFAULT_MARKER,
            event_patterns: true,
        }
    }
}

impl EngineConfig {
    /// Six-digit hex and gradient forms only.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            simple_mode: false,
            ..Self::default()
        }
    }

    /// Builder method to set simple mode.
    #[must_use]
    pub fn with_simple_mode(mut self, simple: bool) -> Self {
        self.simple_mode = simple;
        self
    }

    /// Builder method to set the style marker.
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Builder method to enable/disable event compilation.
    #[must_use]
    pub fn with_event_patterns(mut self, enabled: bool) -> Self {
        self.event_patterns = enabled;
        self
    }
}
