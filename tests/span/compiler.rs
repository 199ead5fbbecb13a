//! Integration tests for event span compilation

use tinct_foundation::{Color, ErrorKind, NamedColor, Rgb};
use tinct_span::{
    ActionKey, Actions, ClickKind, HoverKind, StyledSpan, compile, plain_text, split_actions,
    strip_events, try_compile,
};

// =============================================================================
// Action Lists
// =============================================================================

#[test]
fn last_action_of_each_category_wins() {
    let parts = split_actions("url;a;run;/b;text;one;item;two");
    let actions = Actions::resolve(&parts);
    let click = actions.click.unwrap();
    assert_eq!((click.kind, click.value.as_str()), (ClickKind::RunCommand, "/b"));
    let hover = actions.hover.unwrap();
    assert_eq!((hover.kind, hover.value.as_str()), (HoverKind::ShowItem, "two"));
}

#[test]
fn unknown_keys_resolve_to_nothing() {
    assert!(Actions::resolve(&["warp", "/home"]).is_empty());
}

#[test]
fn every_click_synonym() {
    for key in ["url", "open_url", "file", "open_file", "run", "run_cmd", "run_command",
        "suggest", "suggest_cmd", "suggest_command", "copy", "copy_to_clipboard"]
    {
        assert!(ActionKey::parse(key).is_some_and(ActionKey::is_click), "{key}");
    }
}

#[test]
fn every_hover_synonym() {
    for key in ["text", "show_text", "hover", "hover_text", "item", "show_item", "hover_item",
        "entity", "show_entity", "hover_entity"]
    {
        assert!(matches!(ActionKey::parse(key), Some(ActionKey::Hover(_))), "{key}");
    }
}

// =============================================================================
// Compilation
// =============================================================================

#[test]
fn several_events_in_one_message() {
    let spans = compile("<run;/a>A/> and <suggest;/b>B/>");
    assert_eq!(plain_text(&spans), "A and B");
    assert_eq!(spans[0].click.as_ref().unwrap().value, "/a");
    assert!(spans[1].click.is_none());
    assert_eq!(spans[2].click.as_ref().unwrap().kind, ClickKind::SuggestCommand);
}

#[test]
fn event_text_keeps_true_color() {
    let spans = compile("§x§1§2§3§4§5§6<text;tip>hi/>");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].style.color, Some(Color::Rgb(Rgb::new(0x12, 0x34, 0x56))));
    assert!(spans[0].hover.is_some());
}

#[test]
fn style_changes_inside_event_split_spans() {
    let spans = compile("<url;https://x>§aA§cB/>");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[1].style.color, Some(Color::Named(NamedColor::Red)));
    assert!(spans.iter().all(StyledSpan::is_interactive));
}

#[test]
fn empty_visible_text_produces_no_span() {
    let spans = compile("a<run;/x>/>b");
    assert_eq!(spans, vec![StyledSpan::plain("a"), StyledSpan::plain("b")]);
}

#[test]
fn malformed_list_fails_whole_message() {
    let input = "<run;/ok>fine/> <text>broken/>";
    let err = try_compile(input).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedMarkup { .. }));
    assert_eq!(compile(input), vec![StyledSpan::plain(input)]);
}

#[test]
fn no_close_means_no_event() {
    let spans = compile("<run;/x>never closed");
    assert_eq!(spans, vec![StyledSpan::plain("<run;/x>never closed")]);
}

// =============================================================================
// Stripping
// =============================================================================

#[test]
fn lenient_strip_removes_all_markup() {
    assert_eq!(strip_events("[<run;/a>A/>] [<warp;x>B/>]", false), "[A] [B]");
}

#[test]
fn strict_strip_needs_a_click() {
    assert_eq!(strip_events("[<run;/a>A/>] [<warp;x>B/>]", true), "[A] [<warp;x>B/>]");
}

#[test]
fn strip_does_not_check_arity() {
    assert_eq!(strip_events("<text>x/>", false), "x");
}
