//! Channel-routing format patterns.
//!
//! A format pattern removes its own delimiters from a message and may
//! deliver what they enclosed to one of the recipient's channels. The
//! pipeline hands each pattern's output to the next, so later patterns see
//! a strictly smaller string.
//!
//! | Pattern           | Delimiters              | Interactive      | Non-interactive |
//! |-------------------|-------------------------|------------------|-----------------|
//! | `StatusBar`       | `<ab:` … `/ab>`         | status channel   | dropped         |
//! | `RecipientTarget` | `<p:` … `/p>`           | message          | dropped         |
//! |                   | `<c:` … `/c>`           | dropped          | line            |
//! | `Sound`           | `<sound:` … `/>`        | sound            | dropped         |
//!
//! Whatever is left after the last pattern is delivered once by the engine
//! as a message, unless it is blank or a pattern claimed it with
//! [`Dispatch::mark_remainder_sent`].

use std::fmt;
use std::sync::Arc;

use im::Vector;
use tinct_foundation::Result;
use tinct_foundation::text::try_match_tagged;
use tinct_span::compile;

use crate::config::EngineConfig;
use crate::recipient::{Channel, Recipient};

/// Namespace given to sound ids that do not carry one.
pub const DEFAULT_SOUND_NAMESPACE: &str = "minecraft";

/// Per-send state handed to every format pattern.
pub struct Dispatch<'a> {
    recipient: &'a dyn Recipient,
    config: &'a EngineConfig,
    remainder_sent: bool,
}

impl<'a> Dispatch<'a> {
    /// Creates the dispatch state for one send.
    #[must_use]
    pub fn new(recipient: &'a dyn Recipient, config: &'a EngineConfig) -> Self {
        Self {
            recipient,
            config,
            remainder_sent: false,
        }
    }

    /// The recipient being sent to.
    #[must_use]
    pub fn recipient(&self) -> &'a dyn Recipient {
        self.recipient
    }

    /// Shorthand for `recipient().is_interactive()`.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.recipient.is_interactive()
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// Delivers a message the way the recipient kind expects.
    ///
    /// Interactive recipients get compiled spans (or a plain line when
    /// event patterns are disabled); others get a plain line.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn deliver_message(&self, text: &str) -> Result<()> {
        if self.is_interactive() && self.config.event_patterns {
            self.log(Channel::Spans, text);
            self.recipient.send_spans(&compile(text))
        } else {
            self.deliver_line(text)
        }
    }

    /// Delivers a plain line.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn deliver_line(&self, text: &str) -> Result<()> {
        self.log(Channel::Line, text);
        self.recipient.send_line(text)
    }

    /// Delivers to the status bar.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn deliver_status(&self, text: &str) -> Result<()> {
        self.log(Channel::Status, text);
        self.recipient.send_status(text)
    }

    /// Plays a sound.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn play_sound(&self, sound: &str) -> Result<()> {
        self.log(Channel::Sound, sound);
        self.recipient.play_sound(sound)
    }

    /// Records that a pattern consumed the leftover text itself, so the
    /// engine must not send it.
    pub fn mark_remainder_sent(&mut self) {
        self.remainder_sent = true;
    }

    /// True once a pattern has claimed the leftover text.
    #[must_use]
    pub fn remainder_sent(&self) -> bool {
        self.remainder_sent
    }

    fn log(&self, channel: Channel, text: &str) {
        tracing::debug!(
            %channel,
            recipient = self.recipient.name(),
            interactive = self.is_interactive(),
            len = text.len(),
            "delivering segment"
        );
    }
}

/// A user-supplied format pattern.
pub trait FormatTransform: Send + Sync {
    /// Removes this pattern's markup from `text`, delivering through
    /// `dispatch` as needed, and returns the rest.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    fn process(&self, dispatch: &mut Dispatch<'_>, text: &str) -> Result<String>;

    /// Name used in logs and `Debug` output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// One step of the format pipeline.
#[derive(Clone)]
pub enum FormatPattern {
    /// `<ab:` … `/ab>` status-bar routing.
    StatusBar,
    /// `<p:` … `/p>` / `<c:` … `/c>` routing.
    RecipientTarget,
    /// `<sound:` id `/>` playback.
    Sound,
    /// A registered extension.
    Custom(Arc<dyn FormatTransform>),
}

impl FormatPattern {
    /// Wraps a custom transform.
    #[must_use]
    pub fn custom(transform: impl FormatTransform + 'static) -> Self {
        Self::Custom(Arc::new(transform))
    }

    /// Applies this pattern.
    ///
    /// # Errors
    ///
    /// Propagates sink failures; segments before the failing one have
    /// already been delivered.
    pub fn process(&self, dispatch: &mut Dispatch<'_>, text: &str) -> Result<String> {
        match self {
            Self::StatusBar => status_bar(dispatch, text),
            Self::RecipientTarget => recipient_target(dispatch, text),
            Self::Sound => sound(dispatch, text),
            Self::Custom(transform) => transform.process(dispatch, text),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::StatusBar => "status_bar",
            Self::RecipientTarget => "recipient_target",
            Self::Sound => "sound",
            Self::Custom(transform) => transform.name(),
        }
    }
}

impl fmt::Debug for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusBar => f.write_str("StatusBar"),
            Self::RecipientTarget => f.write_str("RecipientTarget"),
            Self::Sound => f.write_str("Sound"),
            Self::Custom(transform) => f.debug_tuple("Custom").field(&transform.name()).finish(),
        }
    }
}

fn status_bar(dispatch: &Dispatch<'_>, text: &str) -> Result<String> {
    try_match_tagged(text, "<ab:", "/ab>", |inner| {
        if dispatch.is_interactive() {
            dispatch.deliver_status(inner)?;
        }
        Ok(String::new())
    })
}

fn recipient_target(dispatch: &Dispatch<'_>, text: &str) -> Result<String> {
    let interactive = dispatch.is_interactive();
    let rest = try_match_tagged(text, "<p:", "/p>", |inner| {
        if interactive {
            dispatch.deliver_message(inner)?;
        }
        Ok(String::new())
    })?;
    try_match_tagged(&rest, "<c:", "/c>", |inner| {
        if !interactive {
            dispatch.deliver_line(inner)?;
        }
        Ok(String::new())
    })
}

fn sound(dispatch: &Dispatch<'_>, text: &str) -> Result<String> {
    try_match_tagged(text, "<sound:", "/>", |id| {
        if dispatch.is_interactive() {
            dispatch.play_sound(&namespaced_sound(id))?;
        }
        Ok(String::new())
    })
}

/// Prefixes `id` with the default namespace unless it has a `:` past its
/// first character.
#[must_use]
pub fn namespaced_sound(id: &str) -> String {
    if id.find(':').is_some_and(|i| i > 1) {
        id.to_string()
    } else {
        format!("{DEFAULT_SOUND_NAMESPACE}:{id}")
    }
}

/// An ordered list of format patterns.
#[derive(Clone, Debug)]
pub struct FormatPipeline {
    patterns: Vector<FormatPattern>,
}

impl FormatPipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: Vector::new(),
        }
    }

    /// Returns a pipeline with `pattern` appended.
    #[must_use]
    pub fn push(&self, pattern: FormatPattern) -> Self {
        let mut patterns = self.patterns.clone();
        patterns.push_back(pattern);
        Self { patterns }
    }

    /// Returns a pipeline with `pattern` placed first.
    #[must_use]
    pub fn push_front(&self, pattern: FormatPattern) -> Self {
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
    pub fn iter(&self) -> impl Iterator<Item = &FormatPattern> {
        self.patterns.iter()
    }

    /// Runs every pattern in order and returns what is left.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure.
    pub fn apply(&self, dispatch: &mut Dispatch<'_>, text: &str) -> Result<String> {
        let mut out = text.to_string();
        for pattern in &self.patterns {
            out = pattern.process(dispatch, &out)?;
            tracing::trace!(pattern = pattern.name(), "applied format pattern");
        }
        Ok(out)
    }
}

impl Default for FormatPipeline {
    /// Status bar, then recipient target.
    fn default() -> Self {
        Self::empty()
            .push(FormatPattern::StatusBar)
            .push(FormatPattern::RecipientTarget)
    }
}

impl FromIterator<FormatPattern> for FormatPipeline {
    fn from_iter<T: IntoIterator<Item = FormatPattern>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
