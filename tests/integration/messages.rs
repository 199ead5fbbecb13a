//! Realistic server messages through the whole pipeline

use tinct::engine::{Channel, Engine, FormatPattern, RecordingRecipient};
use tinct::replace::replacer;
use tinct::span::{ClickKind, HoverKind};

#[test]
fn join_message_for_everyone() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    let console = RecordingRecipient::console();
    let template = "<ab:&eWelcome back!/ab><c:%p% connected from %ip%/c>&7%p% joined the game";
    let r = replacer!("%p%" => "Notch", "%ip%" => "127.0.0.1");

    let report = engine.broadcast(&[&player, &console], Some(template), Some(&r));
    assert!(report.is_complete());
    assert_eq!(player.deliveries(), vec![
        (Channel::Status, "§eWelcome back!".to_string()),
        (Channel::Spans, "Notch joined the game".to_string()),
    ]);
    assert_eq!(console.deliveries(), vec![
        (Channel::Line, "Notch connected from 127.0.0.1".to_string()),
        (Channel::Line, "§7Notch joined the game".to_string()),
    ]);
}

#[test]
fn clickable_teleport_offer() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    let template = "&a%from% wants to teleport. <run;/tpaccept %from%;text;&7Click to accept>&l[Accept]/>";
    let r = replacer!("%from%" => "Alex");
    engine.send(&player, Some(template), Some(&r)).unwrap();

    let records = player.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Alex wants to teleport. [Accept]");
    let button = records[0].spans.last().unwrap();
    assert_eq!(button.text, "[Accept]");
    assert!(button.style.formatting.bold);
    let click = button.click.as_ref().unwrap();
    assert_eq!((click.kind, click.value.as_str()), (ClickKind::RunCommand, "/tpaccept Alex"));
    let hover = button.hover.as_ref().unwrap();
    assert_eq!((hover.kind, hover.value.as_str()), (HoverKind::ShowText, "§7Click to accept"));
}

#[test]
fn gradient_title_reaches_status_bar() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine
        .send(&player, Some("<ab:<#FF0000ab#0000FF>/ab>"), None)
        .unwrap();
    assert_eq!(player.statuses(), vec!["§x§F§F§0§0§0§0a§x§0§0§0§0§F§Fb"]);
    assert!(player.messages().is_empty());
}

#[test]
fn countdown_with_sound() {
    let engine = Engine::default();
    engine.registry().register_format(FormatPattern::Sound);
    let player = RecordingRecipient::player();
    for n in [2, 1] {
        let r = replacer!("%n%" => n);
        engine
            .send(&player, Some("<sound:block.note_block.hat/>&c%n% <%n%:second:seconds> left"), Some(&r))
            .unwrap();
    }
    assert_eq!(player.sounds().len(), 2);
    assert_eq!(player.messages(), vec!["2 seconds left", "1 second left"]);
}

#[test]
fn broken_event_markup_still_delivers() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine.send(&player, Some("&cOops <run>broken/>"), None).unwrap();
    let records = player.records();
    assert_eq!(records[0].spans.len(), 1);
    assert_eq!(records[0].text, "§cOops <run>broken/>");
}
