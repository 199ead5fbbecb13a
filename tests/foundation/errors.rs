//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tinct_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("%x% does not have a replacement, add one more element");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(format!("{err}").contains("%x%"));
}

#[test]
fn error_missing_template() {
    let err = Error::missing_template("welcome");
    assert!(matches!(err.kind, ErrorKind::MissingTemplate(ref key) if key == "welcome"));
    assert_eq!(format!("{err}"), "missing template: welcome");
}

#[test]
fn error_malformed_markup() {
    let err = Error::malformed_markup("odd action list", "<run>go/>");
    assert!(matches!(err.kind, ErrorKind::MalformedMarkup { .. }));
    assert_eq!(format!("{err}"), "malformed markup (odd action list): <run>go/>");
}

#[test]
fn error_delivery() {
    let err = Error::delivery("socket closed");
    assert!(err.is_delivery());
    assert!(!Error::missing_template("x").is_delivery());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_starts_empty() {
    let err = Error::delivery("x");
    assert!(err.context.is_none());
}

#[test]
fn context_display_template_and_recipient() {
    let ctx = ErrorContext::new().with_template("motd").with_recipient("steve");
    assert_eq!(format!("{ctx}"), "in template motd for steve");
}

#[test]
fn context_display_stack() {
    let ctx = ErrorContext::new()
        .with_recipient("console")
        .with_frame("send")
        .with_frame("status_bar");
    assert_eq!(format!("{ctx}"), "for console\n  in send\n  in status_bar\n");
}

#[test]
fn context_survives_on_error() {
    let err = Error::delivery("x").with_context(ErrorContext::new().with_recipient("alex"));
    assert_eq!(err.context.unwrap().recipient.as_deref(), Some("alex"));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::invalid_argument("x"));
}
