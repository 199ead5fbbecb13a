//! Terminal rendering of spans and a terminal recipient.

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::io::Write;

use tinct_engine::Recipient;
use tinct_foundation::{Error, Result};
use tinct_span::{ClickKind, Style, StyledSpan, decode};

const RESET: &str = "\x1b[0m";

/// The SGR escape selecting `style`, starting from a reset.
#[must_use]
pub fn style_escape(style: &Style) -> String {
    let mut codes = vec!["0".to_string()];
    if let Some(color) = style.color {
        let [r, g, b] = color.to_rgb().channels();
        codes.push(format!("38;2;{r};{g};{b}"));
    }
    let formats = &style.formatting;
    for (on, code) in [
        (formats.bold, "1"),
        (formats.italic, "3"),
        (formats.underline, "4"),
        (formats.obfuscated, "5"),
        (formats.strikethrough, "9"),
    ] {
        if on {
            codes.push(code.to_string());
        }
    }
    format!("\x1b[{}m", codes.join(";"))
}

/// Renders spans as ANSI text. URL click actions become OSC 8 hyperlinks.
#[must_use]
pub fn render_spans(spans: &[StyledSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        out.push_str(&style_escape(&span.style));
        match &span.click {
            Some(click) if click.kind == ClickKind::OpenUrl => {
                let _ = write!(out, "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", click.value, span.text);
            }
            _ => out.push_str(&span.text),
        }
    }
    if !spans.is_empty() {
        out.push_str(RESET);
    }
    out
}

/// Renders text containing style escapes as ANSI text.
#[must_use]
pub fn render_legacy(text: &str) -> String {
    render_spans(&decode(text))
}

/// A recipient that writes every channel to a terminal stream.
///
/// The recipient kind can be flipped at runtime so one terminal can preview
/// both player and console routing.
pub struct TerminalRecipient<W: Write> {
    out: RefCell<W>,
    interactive: Cell<bool>,
    show_spans: Cell<bool>,
    ansi: bool,
}

impl<W: Write> TerminalRecipient<W> {
    /// Creates a player-like recipient writing ANSI to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            interactive: Cell::new(true),
            show_spans: Cell::new(false),
            ansi: true,
        }
    }

    /// Builder method to enable/disable ANSI escapes.
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Switches between player-like and console-like routing.
    pub fn set_interactive(&self, interactive: bool) {
        self.interactive.set(interactive);
    }

    /// Toggles the span dump after each rich line; returns the new state.
    pub fn toggle_spans(&self) -> bool {
        let show = !self.show_spans.get();
        self.show_spans.set(show);
        show
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Writes a raw line, outside of any channel.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the stream fails.
    pub fn println(&self, line: &str) -> Result<()> {
        writeln!(self.out.borrow_mut(), "{line}")
            .map_err(|e| Error::delivery(format!("terminal write failed: {e}")))
    }

    fn paint(&self, text: &str) -> String {
        if self.ansi {
            render_legacy(text)
        } else {
            tinct_foundation::strip(text, tinct_foundation::STYLE_ESCAPE)
        }
    }
}

impl<W: Write> Recipient for TerminalRecipient<W> {
    fn is_interactive(&self) -> bool {
        self.interactive.get()
    }

    fn send_line(&self, text: &str) -> Result<()> {
        self.println(&self.paint(text))
    }

    fn send_status(&self, text: &str) -> Result<()> {
        self.println(&format!("[status] {}", self.paint(text)))
    }

    fn send_spans(&self, spans: &[StyledSpan]) -> Result<()> {
        let line = if self.ansi {
            render_spans(spans)
        } else {
            tinct_span::plain_text(spans)
        };
        self.println(&line)?;
        if self.show_spans.get() {
            for span in spans {
                self.println(&format!("  - {span}"))?;
            }
        }
        Ok(())
    }

    fn play_sound(&self, sound: &str) -> Result<()> {
        self.println(&format!("[sound] {sound}"))
    }

    fn name(&self) -> &str {
        "terminal"
    }
}
