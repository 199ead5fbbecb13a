//! Preview REPL, ANSI rendering, and CLI for Tinct.
//!
//! This crate provides:
//! - [`Repl`] - Interactive template preview
//! - [`TerminalRecipient`] - A recipient that prints every channel to a terminal
//! - [`render_spans`] - Styled spans to ANSI escapes
//! - CLI argument parsing and execution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ansi;
pub mod editor;
pub mod highlight;
pub mod repl;

pub use ansi::{TerminalRecipient, render_legacy, render_spans, style_escape};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::MarkupHighlighter;
pub use repl::Repl;
