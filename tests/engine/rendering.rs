//! Integration tests for render, send, and broadcast

use tinct_engine::{Engine, EngineConfig, Recipient, RecordingRecipient};
use tinct_foundation::{ErrorKind, Result};
use tinct_replace::replacer;

// =============================================================================
// Render
// =============================================================================

#[test]
fn render_full_pipeline() {
    let engine = Engine::default();
    let r = replacer!("%p%" => "Steve", "%n%" => 1);
    assert_eq!(
        engine.render(Some("&a%p% has %n% <%n%:life:lives>"), Some(&r)).as_deref(),
        Some("§aSteve has 1 life")
    );
}

#[test]
fn substituted_values_are_colored_too() {
    let engine = Engine::default();
    let r = replacer!("%rank%" => "&c[Admin]");
    assert_eq!(engine.render(Some("%rank% Sam"), Some(&r)).as_deref(), Some("§c[Admin] Sam"));
}

#[test]
fn render_absent_template() {
    assert_eq!(Engine::default().render(None, Some(&replacer!("a" => "b"))), None);
}

#[test]
fn render_required_present() {
    let engine = Engine::default();
    assert_eq!(engine.render_required("k", Some("&lok"), None).unwrap(), "§lok");
    let err = engine.render_required("k", None, None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingTemplate(_)));
}

#[test]
fn custom_marker_engine() {
    let engine = Engine::new(EngineConfig::default().with_marker('$'));
    assert_eq!(engine.colorize("$a&a"), "§a&a");
}

#[test]
fn strict_mode_skips_short_forms() {
    let engine = Engine::new(EngineConfig::strict());
    assert_eq!(engine.colorize("<#F00xy#00F>"), "<#F00xy#00F>");
}

// =============================================================================
// Send
// =============================================================================

#[test]
fn send_returns_remainder() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    let rest = engine.send(&console, Some("<ab:x/ab>left"), None).unwrap();
    assert_eq!(rest.as_deref(), Some("left"));
}

#[test]
fn send_blank_message_delivers_nothing() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    engine.send(&console, Some("   "), None).unwrap();
    engine.send(&console, Some(""), None).unwrap();
    assert!(console.deliveries().is_empty());
}

#[test]
fn player_receives_spans() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine.send(&player, Some("&cHi <url;https://a.b>docs/>"), None).unwrap();
    let records = player.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Hi docs");
    assert!(records[0].spans[1].click.is_some());
}

/// Only implements the required sinks.
struct Minimal {
    lines: std::cell::RefCell<Vec<String>>,
}

impl Recipient for Minimal {
    fn is_interactive(&self) -> bool {
        true
    }

    fn send_line(&self, text: &str) -> Result<()> {
        self.lines.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[test]
fn default_sinks_fall_back_to_lines() {
    let engine = Engine::default();
    let minimal = Minimal {
        lines: std::cell::RefCell::new(Vec::new()),
    };
    engine
        .send(&minimal, Some("<ab:ignored/ab>&aHi <run;/x>there/>"), None)
        .unwrap();
    assert_eq!(*minimal.lines.borrow(), vec!["Hi there"]);
}

// =============================================================================
// Broadcast
// =============================================================================

#[test]
fn broadcast_routes_per_recipient() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    let console = RecordingRecipient::console();
    let report = engine.broadcast(
        &[&player, &console],
        Some("<p:%p% joined/p><c:[log] %p% joined/c>"),
        Some(&replacer!("%p%" => "Alex")),
    );
    assert!(report.is_complete());
    assert_eq!(report.delivered, 2);
    assert_eq!(player.messages(), vec!["Alex joined"]);
    assert_eq!(console.messages(), vec!["[log] Alex joined"]);
}

#[test]
fn broadcast_failure_carries_context() {
    let engine = Engine::default();
    let broken = RecordingRecipient::new("flaky", false).failing();
    let report = engine.broadcast(&[&broken], Some("hi"), None);
    assert_eq!(report.delivered, 0);
    let err = &report.failures[0];
    assert!(err.is_delivery());
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.recipient.as_deref(), Some("flaky"));
    assert_eq!(ctx.stack, vec!["broadcast"]);
}
