//! Integration tests for the color pipeline

use crate::seq;
use tinct_color::{ColorPattern, ColorPipeline};

#[test]
fn default_pipeline_order() {
    let pipeline = ColorPipeline::default();
    let names: Vec<_> = pipeline.iter().map(ColorPattern::name).collect();
    assert_eq!(names, vec!["gradient", "hex", "classic"]);
}

#[test]
fn default_pipeline_compiles_everything() {
    let out = ColorPipeline::default().apply("<#FF0000ab#0000FF> &l#FFFFFFc", true);
    assert_eq!(
        out,
        format!("{}a{}b §l{}c", seq("FF0000"), seq("0000FF"), seq("FFFFFF"))
    );
}

#[test]
fn empty_pipeline_is_identity() {
    assert_eq!(ColorPipeline::empty().apply("&a#FFF", true), "&a#FFF");
}

#[test]
fn custom_patterns_run_in_order() {
    let pipeline = ColorPipeline::empty()
        .push(ColorPattern::custom(|t: &str, _: bool| t.replace("x", "y")))
        .push(ColorPattern::custom(|t: &str, _: bool| t.replace("y", "z")));
    assert_eq!(pipeline.apply("x", false), "z");
}

#[test]
fn push_front_runs_first() {
    let pipeline = ColorPipeline::default()
        .push_front(ColorPattern::custom(|t: &str, _: bool| t.replace(":warn:", "&c")));
    assert_eq!(pipeline.apply(":warn:careful", true), "§ccareful");
}

#[test]
fn push_does_not_touch_original() {
    let base = ColorPipeline::default();
    let longer = base.push(ColorPattern::Hex);
    assert_eq!(base.len(), 3);
    assert_eq!(longer.len(), 4);
}

#[test]
fn simple_flag_reaches_custom_patterns() {
    let pipeline = ColorPipeline::empty()
        .push(ColorPattern::custom(|t: &str, simple: bool| format!("{t}{simple}")));
    assert_eq!(pipeline.apply("", true), "true");
    assert_eq!(pipeline.apply("", false), "false");
}
