//! Terminal rendering of full messages

use tinct::engine::Engine;
use tinct::runtime::{TerminalRecipient, render_legacy};

fn transcript(interactive: bool, template: &str) -> String {
    let engine = Engine::default();
    let terminal = TerminalRecipient::new(Vec::new()).with_ansi(false);
    terminal.set_interactive(interactive);
    engine.send(&terminal, Some(template), None).unwrap();
    String::from_utf8(terminal.into_inner()).unwrap()
}

#[test]
fn player_transcript() {
    assert_eq!(
        transcript(true, "<ab:&6Gold/ab><p:secret/p>&ahello"),
        "[status] Gold\nsecret\nhello\n"
    );
}

#[test]
fn console_transcript() {
    assert_eq!(
        transcript(false, "<ab:&6Gold/ab><p:secret/p><c:audit/c>&ahello"),
        "audit\nhello\n"
    );
}

#[test]
fn ansi_output_uses_true_color() {
    assert_eq!(render_legacy("§aok"), "\x1b[0;38;2;85;255;85mok\x1b[0m");
}
