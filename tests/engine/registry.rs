//! Integration tests for the pattern registry

use std::sync::Arc;
use std::thread;

use tinct_color::ColorPattern;
use tinct_engine::{Engine, FormatPattern, RecordingRecipient, Registry, SharedRegistry};

#[test]
fn registration_is_persistent() {
    let base = Registry::default();
    let more = base
        .with_color_pattern(ColorPattern::Hex)
        .with_format_pattern(FormatPattern::Sound);
    assert_eq!((base.color().len(), base.format().len()), (3, 2));
    assert_eq!((more.color().len(), more.format().len()), (4, 3));
}

#[test]
fn store_replaces_whole_registry() {
    let shared = SharedRegistry::default();
    shared.store(Registry::default().with_format_pattern(FormatPattern::Sound));
    assert_eq!(shared.load().format().len(), 3);
}

#[test]
fn shared_registry_from_registry() {
    let shared: SharedRegistry = Registry::with_marker('!').into();
    assert_eq!(shared.load().color().apply("!ahi", true), "§ahi");
}

#[test]
fn renders_race_with_registration() {
    let engine = Arc::new(Engine::default());
    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..20 {
                engine.registry().register_color(ColorPattern::custom(|t: &str, _: bool| t.to_string()));
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(engine.colorize("&ahi").as_str(), "§ahi");
                }
            })
        })
        .collect();
    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(engine.registry().load().color().len(), 23);
}

#[test]
fn late_format_pattern_reaches_next_send() {
    let engine = Engine::default();
    let player = RecordingRecipient::player();
    engine.send(&player, Some("<sound:ui.click/>"), None).unwrap();
    assert!(player.sounds().is_empty());
    assert_eq!(player.messages(), vec!["<sound:ui.click/>"]);

    player.clear();
    engine.registry().register_format(FormatPattern::Sound);
    engine.send(&player, Some("<sound:ui.click/>"), None).unwrap();
    assert_eq!(player.sounds(), vec!["minecraft:ui.click"]);
    assert!(player.messages().is_empty());
}
