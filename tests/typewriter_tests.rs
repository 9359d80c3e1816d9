// Typewriter reveal and the hero role rotation.

use folio_core::{RoleCycle, Typewriter};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn reveals_one_char_per_interval() {
    let mut tw = Typewriter::new("Rust", ms(100));
    assert_eq!(tw.visible(), "");
    assert!(tw.caret_visible());
    assert!(!tw.tick(ms(99)));
    assert!(tw.tick(ms(1)));
    assert_eq!(tw.visible(), "R");
    assert!(tw.tick(ms(250)));
    assert_eq!(tw.visible(), "Rus");
    assert!(tw.tick(ms(100)));
    assert_eq!(tw.visible(), "Rust");
    assert!(tw.is_complete());
    assert!(!tw.caret_visible());
    assert!(!tw.tick(ms(1000)));
}

#[test]
fn default_interval_is_150ms() {
    let mut tw = Typewriter::with_default_interval("ab");
    tw.tick(ms(149));
    assert_eq!(tw.revealed_chars(), 0);
    tw.tick(ms(1));
    assert_eq!(tw.revealed_chars(), 1);
}

#[test]
fn multibyte_text_is_cut_on_char_boundaries() {
    let mut tw = Typewriter::new("né✓🦀", ms(10));
    assert_eq!(tw.char_count(), 4);
    let mut seen = Vec::new();
    while !tw.is_complete() {
        tw.tick(ms(10));
        seen.push(tw.visible().to_owned());
    }
    assert_eq!(seen, ["n", "né", "né✓", "né✓🦀"]);
}

#[test]
fn new_text_restarts_same_text_does_not() {
    let mut tw = Typewriter::new("hello", ms(10));
    tw.tick(ms(30));
    tw.set_text("hello");
    assert_eq!(tw.visible(), "hel");
    tw.set_text("world");
    assert_eq!(tw.visible(), "");
    assert_eq!(tw.text(), "world");
}

#[test]
fn empty_text_is_immediately_complete() {
    let mut tw = Typewriter::new("", ms(10));
    assert!(tw.is_complete());
    assert!(!tw.tick(ms(10)));
    assert_eq!(tw.visible(), "");
}

#[test]
fn zero_interval_reveals_everything_at_once() {
    let mut tw = Typewriter::new("abc", Duration::ZERO);
    assert!(tw.tick(Duration::ZERO));
    assert_eq!(tw.visible(), "abc");
}

static ROLES: &[&str] = &["AI", "Open Source", "DevOps"];

#[test]
fn roles_rotate_every_period_and_wrap() {
    let mut cycle = RoleCycle::new(ROLES, ms(3000), ms(100));
    assert_eq!(cycle.current_role(), "AI");
    cycle.tick(ms(2999));
    assert_eq!(cycle.current_index(), 0);
    assert!(cycle.tick(ms(1)));
    assert_eq!(cycle.current_role(), "Open Source");
    assert_eq!(cycle.writer().visible(), "");
    cycle.tick(ms(3000));
    cycle.tick(ms(3000));
    assert_eq!(cycle.current_index(), 0);
}

#[test]
fn role_change_carries_the_remainder_into_typing() {
    let mut cycle = RoleCycle::new(ROLES, ms(1000), ms(100));
    cycle.tick(ms(1250));
    assert_eq!(cycle.current_role(), "Open Source");
    assert_eq!(cycle.writer().visible(), "Op");
}

#[test]
fn single_role_never_rotates() {
    static ONE: &[&str] = &["Only"];
    let mut cycle = RoleCycle::hero(ONE);
    for _ in 0..100 {
        cycle.tick(ms(250));
    }
    assert_eq!(cycle.current_index(), 0);
    assert_eq!(cycle.writer().visible(), "Only");
}

#[test]
fn empty_role_list_is_harmless() {
    static NONE: &[&str] = &[];
    let mut cycle = RoleCycle::hero(NONE);
    assert!(!cycle.tick(ms(5000)));
    assert_eq!(cycle.current_role(), "");
}
