//! The recipient capability and a recording test double.

use std::fmt;

use parking_lot::Mutex;
use tinct_foundation::{Error, Result};
use tinct_span::{StyledSpan, plain_text};

/// A delivery channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Plain chat-equivalent line.
    Line,
    /// Rich line made of styled spans.
    Spans,
    /// Secondary status-bar channel.
    Status,
    /// Sound playback.
    Sound,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "line",
            Self::Spans => "spans",
            Self::Status => "status",
            Self::Sound => "sound",
        })
    }
}

/// The target of a rendered message.
///
/// The engine branches on [`is_interactive`](Recipient::is_interactive)
/// only, never on a concrete recipient type. Only `send_line` is required;
/// the other sinks default to a no-op (status, sound) or to a plain line
/// (spans).
pub trait Recipient {
    /// True for player-like recipients, false for console-like ones.
    fn is_interactive(&self) -> bool;

    /// Delivers a plain line.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the sink fails.
    fn send_line(&self, text: &str) -> Result<()>;

    /// Delivers text to the status-bar channel.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the sink fails.
    fn send_status(&self, text: &str) -> Result<()> {
        let _ = text;
        Ok(())
    }

    /// Delivers a rich line.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the sink fails.
    fn send_spans(&self, spans: &[StyledSpan]) -> Result<()> {
        self.send_line(&plain_text(spans))
    }

    /// Plays a namespaced sound.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the sink fails.
    fn play_sound(&self, sound: &str) -> Result<()> {
        let _ = sound;
        Ok(())
    }

    /// Name used in logs and error context.
    fn name(&self) -> &str {
        if self.is_interactive() { "player" } else { "console" }
    }
}

/// One recorded delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Channel used.
    pub channel: Channel,
    /// Delivered text; for [`Channel::Spans`] the spans' plain text.
    pub text: String,
    /// Delivered spans, empty unless `channel` is [`Channel::Spans`].
    pub spans: Vec<StyledSpan>,
}

/// A recipient that records every delivery.
///
/// ```
/// use tinct_engine::{Channel, Recipient, RecordingRecipient};
///
/// let console = RecordingRecipient::console();
/// console.send_line("hello").unwrap();
/// assert_eq!(console.deliveries(), vec![(Channel::Line, "hello".to_string())]);
/// ```
#[derive(Debug)]
pub struct RecordingRecipient {
    name: String,
    interactive: bool,
    failing: bool,
    log: Mutex<Vec<Delivery>>,
}

impl RecordingRecipient {
    /// Creates a recorder.
    #[must_use]
    pub fn new(name: impl Into<String>, interactive: bool) -> Self {
        Self {
            name: name.into(),
            interactive,
            failing: false,
            log: Mutex::new(Vec::new()),
        }
    }

    /// An interactive recorder named `player`.
    #[must_use]
    pub fn player() -> Self {
        Self::new("player", true)
    }

    /// A non-interactive recorder named `console`.
    #[must_use]
    pub fn console() -> Self {
        Self::new("console", false)
    }

    /// Makes every sink fail with a `Delivery` error. Nothing is recorded.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every delivery as `(channel, text)`, in order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<(Channel, String)> {
        self.log
            .lock()
            .iter()
            .map(|d| (d.channel, d.text.clone()))
            .collect()
    }

    /// Every delivery with its spans, in order.
    #[must_use]
    pub fn records(&self) -> Vec<Delivery> {
        self.log.lock().clone()
    }

    /// Texts delivered as lines or spans, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.texts(|c| matches!(c, Channel::Line | Channel::Spans))
    }

    /// Texts delivered to the status bar, in order.
    #[must_use]
    pub fn statuses(&self) -> Vec<String> {
        self.texts(|c| c == Channel::Status)
    }

    /// Sounds played, in order.
    #[must_use]
    pub fn sounds(&self) -> Vec<String> {
        self.texts(|c| c == Channel::Sound)
    }

    /// Forgets every recorded delivery.
    pub fn clear(&self) {
        self.log.lock().clear();
    }

    fn texts(&self, keep: impl Fn(Channel) -> bool) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter(|d| keep(d.channel))
            .map(|d| d.text.clone())
            .collect()
    }

    fn record(&self, channel: Channel, text: &str, spans: &[StyledSpan]) -> Result<()> {
        if self.failing {
            return Err(Error::delivery(format!("{} rejected a {channel} delivery", self.name)));
        }
        self.log.lock().push(Delivery {
            channel,
            text: text.to_string(),
            spans: spans.to_vec(),
        });
        Ok(())
    }
}

impl Recipient for RecordingRecipient {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn send_line(&self, text: &str) -> Result<()> {
        self.record(Channel::Line, text, &[])
    }

    fn send_status(&self, text: &str) -> Result<()> {
        self.record(Channel::Status, text, &[])
    }

    fn send_spans(&self, spans: &[StyledSpan]) -> Result<()> {
        self.record(Channel::Spans, &plain_text(spans), spans)
    }

    fn play_sound(&self, sound: &str) -> Result<()> {
        self.record(Channel::Sound, sound, &[])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
