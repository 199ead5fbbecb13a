//! Error types for the Tinct system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Tinct operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a missing template error for the given template key.
    #[must_use]
    pub fn missing_template(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingTemplate(key.into()))
    }

    /// Creates a malformed markup error.
    #[must_use]
    pub fn malformed_markup(reason: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedMarkup {
            reason: reason.into(),
            input: input.into(),
        })
    }

    /// Creates a delivery error raised by a recipient sink.
    #[must_use]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Delivery(message.into()))
    }

    /// Returns true if this error came from a delivery sink.
    #[must_use]
    pub fn is_delivery(&self) -> bool {
        matches!(self.kind, ErrorKind::Delivery(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument violated a construction-time invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required template was absent.
    #[error("missing template: {0}")]
    MissingTemplate(String),

    /// Markup was recognized but could not be compiled.
    #[error("malformed markup ({reason}): {input}")]
    MalformedMarkup {
        /// Why the markup was rejected.
        reason: String,
        /// The input that failed to compile.
        input: String,
    },

    /// A recipient sink failed to deliver a message.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Template key the error relates to.
    pub template: Option<String>,
    /// Recipient the message was addressed to.
    pub recipient: Option<String>,
    /// Stack of render stages that were active.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template key.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the recipient name.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(template) = &self.template {
            write!(f, "in template {template}")?;
        }
        if let Some(recipient) = &self.recipient {
            if self.template.is_some() {
                write!(f, " ")?;
            }
            write!(f, "for {recipient}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
