//! Integration tests for format routing

use tinct_engine::{
    Channel, Dispatch, EngineConfig, FormatPattern, FormatPipeline, FormatTransform, Engine,
    RecordingRecipient, namespaced_sound,
};
use tinct_foundation::Result;
use tinct_span::ClickKind;

// =============================================================================
// Status Bar
// =============================================================================

#[test]
fn status_bar_for_player() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine.send(&player, Some("<ab:Hi/ab>rest"), None).unwrap();
    assert_eq!(player.statuses(), vec!["Hi"]);
    assert_eq!(player.messages(), vec!["rest"]);
}

#[test]
fn status_bar_dropped_for_console() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    engine.send(&console, Some("<ab:Hi/ab>rest"), None).unwrap();
    assert_eq!(console.deliveries(), vec![(Channel::Line, "rest".to_string())]);
}

#[test]
fn several_status_segments_in_order() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine.send(&player, Some("<ab:one/ab><ab:two/ab>"), None).unwrap();
    assert_eq!(player.statuses(), vec!["one", "two"]);
    assert!(player.messages().is_empty());
}

#[test]
fn unclosed_status_is_left_alone() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    let rest = engine.send(&console, Some("<ab:never"), None).unwrap();
    assert_eq!(rest.as_deref(), Some("<ab:never"));
}

// =============================================================================
// Recipient Targets
// =============================================================================

#[test]
fn console_gets_exactly_two_sends() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    engine
        .send(&console, Some("<p:PlayerOnly/p><c:ConsoleOnly/c>common"), None)
        .unwrap();
    assert_eq!(console.deliveries(), vec![
        (Channel::Line, "ConsoleOnly".to_string()),
        (Channel::Line, "common".to_string()),
    ]);
}

#[test]
fn player_never_sees_console_segment() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine
        .send(&player, Some("<p:PlayerOnly/p><c:ConsoleOnly/c>common"), None)
        .unwrap();
    assert_eq!(player.messages(), vec!["PlayerOnly", "common"]);
}

#[test]
fn whitespace_remainder_is_not_sent() {
    let engine = Engine::default();
    let console = RecordingRecipient::console();
    engine.send(&console, Some("<c:only/c>   "), None).unwrap();
    assert_eq!(console.messages(), vec!["only"]);
}

#[test]
fn player_segments_compile_events() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine
        .send(&player, Some("<p:<run;/spawn>Home/>/p>"), None)
        .unwrap();
    let records = player.records();
    assert_eq!(records.len(), 1);
    let click = records[0].spans[0].click.as_ref().unwrap();
    assert_eq!(click.kind, ClickKind::RunCommand);
}

#[test]
fn event_patterns_can_be_disabled() {
    let engine = Engine::new(EngineConfig::default().with_event_patterns(false));
    let player = RecordingRecipient::player();
    engine.send(&player, Some("<run;/x>Go/>"), None).unwrap();
    assert_eq!(player.deliveries(), vec![(Channel::Line, "<run;/x>Go/>".to_string())]);
}

// =============================================================================
// Sounds
// =============================================================================

#[test]
fn sound_namespacing() {
    assert_eq!(namespaced_sound("ding"), "minecraft:ding");
    assert_eq!(namespaced_sound("mymod:ding"), "mymod:ding");
    assert_eq!(namespaced_sound("a:b"), "minecraft:a:b");
}

#[test]
fn sound_pattern_plays_for_player_only() {
    let engine = Engine::default();
    engine.registry().register_format(FormatPattern::Sound);
    let player = RecordingRecipient::player();
    let console = RecordingRecipient::console();
    engine.send(&player, Some("<sound:entity.cat.ambient/>meow"), None).unwrap();
    engine.send(&console, Some("<sound:entity.cat.ambient/>meow"), None).unwrap();
    assert_eq!(player.sounds(), vec!["minecraft:entity.cat.ambient"]);
    assert!(console.sounds().is_empty());
    assert_eq!(console.messages(), vec!["meow"]);
}

// =============================================================================
// Custom Patterns
// =============================================================================

struct Shout;

impl FormatTransform for Shout {
    fn process(&self, dispatch: &mut Dispatch<'_>, text: &str) -> Result<String> {
        if let Some(rest) = text.strip_prefix("!!") {
            dispatch.deliver_status(&rest.to_uppercase())?;
            return Ok(String::new());
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "shout"
    }
}

#[test]
fn custom_pattern_can_consume_message() {
    let pipeline: FormatPipeline = [FormatPattern::custom(Shout), FormatPattern::RecipientTarget]
        .into_iter()
        .collect();
    let registry = tinct_engine::Registry::new(tinct_color::ColorPipeline::default(), pipeline);
    let engine = Engine::with_registry(EngineConfig::default(), registry);
    let player = RecordingRecipient::player();
    let rest = engine.send(&player, Some("!!hello"), None).unwrap();
    assert_eq!(rest.as_deref(), Some(""));
    assert_eq!(player.deliveries(), vec![(Channel::Status, "HELLO".to_string())]);
}

#[test]
fn custom_pattern_names() {
    assert_eq!(FormatPattern::custom(Shout).name(), "shout");
    assert_eq!(FormatPattern::StatusBar.name(), "status_bar");
}
