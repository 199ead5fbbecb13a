//! The preview REPL.
//!
//! Each input line is rendered as a template with the session's tokens and
//! sent to a terminal recipient. Lines starting with `:` are commands.

use crate::ansi::TerminalRecipient;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::Path;
use tinct_engine::{Engine, EngineConfig};
use tinct_foundation::{Error, ErrorKind, Result};
use tinct_replace::Replacer;
use tinct_span::strip_events;

const HELP: &str = "\
Commands:
  :set TOKEN VALUE   Substitute TOKEN with VALUE in later lines
  :unset TOKEN       Forget a substitution
  :clear             Forget every substitution
  :tokens            Show the current substitutions
  :player            Preview as a player (rich spans, status bar, sounds)
  :console           Preview as the console (plain lines)
  :spans             Toggle the span dump after rich lines
  :strip TEXT        Show TEXT with event markup removed
  :help              Show this help
  :quit              Exit";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// The rendering engine.
    engine: Engine,

    /// Session substitutions.
    replacer: Replacer,

    /// Where rendered output goes.
    terminal: TerminalRecipient<W>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a REPL on stdout with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.marker)?;
        Ok(Self::with_parts(
            editor,
            Engine::new(config),
            TerminalRecipient::new(io::stdout()),
        ))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a REPL from its parts.
    pub fn with_parts(editor: E, engine: Engine, terminal: TerminalRecipient<W>) -> Self {
        Self {
            editor,
            engine,
            replacer: Replacer::empty(),
            terminal,
            show_banner: true,
            prompt: "tinct> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The session substitutions.
    #[must_use]
    pub const fn replacer(&self) -> &Replacer {
        &self.replacer
    }

    /// The terminal recipient.
    #[must_use]
    pub const fn terminal(&self) -> &TerminalRecipient<W> {
        &self.terminal
    }

    /// Consumes the REPL, returning the terminal.
    pub fn into_terminal(self) -> TerminalRecipient<W> {
        self.terminal
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);
            match self.eval(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }
        Ok(())
    }

    /// Evaluates one line. Returns `Ok(false)` when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed command or a failed delivery.
    pub fn eval(&mut self, line: &str) -> Result<bool> {
        let Some(command) = line.strip_prefix(':') else {
            self.engine
                .send(&self.terminal, Some(line), Some(&self.replacer))?;
            return Ok(true);
        };

        let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
        match name {
            "set" => {
                let (token, value) = rest
                    .trim_start()
                    .split_once(' ')
                    .ok_or_else(|| Error::invalid_argument("usage: :set TOKEN VALUE"))?;
                self.unset(token);
                self.replacer = std::mem::take(&mut self.replacer).with(token, value);
                self.refresh_keywords();
            }
            "unset" => {
                self.unset(rest.trim());
                self.refresh_keywords();
            }
            "clear" => {
                self.replacer = Replacer::empty();
                self.refresh_keywords();
            }
            "tokens" => self.terminal.println(&self.replacer.to_string())?,
            "player" => self.terminal.set_interactive(true),
            "console" => self.terminal.set_interactive(false),
            "spans" => {
                let on = self.terminal.toggle_spans();
                self.terminal
                    .println(if on { "span dump on" } else { "span dump off" })?;
            }
            "strip" => {
                let rendered = self
                    .engine
                    .render(Some(rest), Some(&self.replacer))
                    .unwrap_or_default();
                self.terminal.println(&strip_events(&rendered, false))?;
            }
            "help" => self.terminal.println(HELP)?,
            "quit" | "q" => return Ok(false),
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command :{other} (try :help)"
                )));
            }
        }
        Ok(true)
    }

    /// Sends every non-empty line of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        tracing::debug!(path = %path.display(), "evaluating file");

        for line in source.lines().filter(|l| !l.trim().is_empty()) {
            if !self.eval(line)? {
                break;
            }
        }
        Ok(())
    }

    fn unset(&mut self, token: &str) {
        self.replacer = Replacer::from_pairs(
            self.replacer
                .pairs()
                .into_iter()
                .filter(|(t, _)| t != token),
        );
    }

    fn refresh_keywords(&mut self) {
        let tokens = self.replacer.pairs().into_iter().map(|(t, _)| t).collect();
        self.editor.set_keywords(tokens);
    }

    fn print_banner(&self) -> Result<()> {
        self.terminal.println(&format!(
            "&d&lTinct&r preview v{}\nType a template to render it, :help for commands.\n",
            env!("CARGO_PKG_VERSION")
        ).replace('&', "\u{a7}"))?;
        let _ = io::stdout().flush();
        Ok(())
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
