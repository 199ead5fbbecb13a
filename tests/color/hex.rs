//! Integration tests for single-anchor hex colors

use crate::seq;
use tinct_color::apply_hex;

#[test]
fn six_digit_color() {
    assert_eq!(apply_hex("#00FF00go", false), format!("{}go", seq("00FF00")));
}

#[test]
fn three_digit_color_in_simple_mode() {
    assert_eq!(apply_hex("#0F0go", true), format!("{}go", seq("00FF00")));
    assert_eq!(apply_hex("#0F0go", false), "#0F0go");
}

#[test]
fn four_or_five_digits_take_the_short_form() {
    assert_eq!(apply_hex("#0F0A!", true), format!("{}A!", seq("00FF00")));
}

#[test]
fn too_few_digits_stay_literal() {
    assert_eq!(apply_hex("#1 and #", true), "#1 and #");
}

#[test]
fn digit_case_is_kept() {
    assert_eq!(apply_hex("#abcdef", false), "§x§a§b§c§d§e§f");
}
