#![allow(clippy::float_cmp)]

use super::*;

fn sections() -> Vec<SectionBox> {
    // Three stacked 600px sections, scrolled so the second straddles y=100.
    vec![
        SectionBox { top: -700.0, bottom: -100.0, offset_top: 0.0 },
        SectionBox { top: -100.0, bottom: 500.0, offset_top: 600.0 },
        SectionBox { top: 500.0, bottom: 1100.0, offset_top: 1200.0 },
    ]
}

// =============================================================
// Keys
// =============================================================

#[test]
fn key_classification() {
    assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
    assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Up));
    assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
    assert_eq!(NavKey::from_key("ArrowLeft"), None);
    assert_eq!(NavKey::from_key("j"), None);
}

#[test]
fn text_entry_detection() {
    assert!(is_text_entry("INPUT", false));
    assert!(is_text_entry("textarea", false));
    assert!(is_text_entry("SELECT", false));
    assert!(is_text_entry("DIV", true));
    assert!(!is_text_entry("A", false));
    assert!(!is_text_entry("BODY", false));
}

#[test]
fn arrows_are_claimed_outside_text_entry() {
    assert!(claims_key(NavKey::Down, false));
    assert!(claims_key(NavKey::Up, false));
    assert!(!claims_key(NavKey::Down, true));
    assert!(!claims_key(NavKey::Up, true));
    assert!(!claims_key(NavKey::Escape, false));
}

// =============================================================
// Current section and stepping
// =============================================================

#[test]
fn current_section_straddles_reference_line() {
    assert_eq!(current_section(&sections(), 100.0), Some(1));
}

#[test]
fn boundary_touching_line_counts() {
    let boxes = [SectionBox { top: 100.0, bottom: 700.0, offset_top: 0.0 }];
    assert_eq!(current_section(&boxes, 100.0), Some(0));
}

#[test]
fn first_match_wins_when_sections_overlap() {
    let boxes = [
        SectionBox { top: 0.0, bottom: 200.0, offset_top: 0.0 },
        SectionBox { top: 50.0, bottom: 250.0, offset_top: 50.0 },
    ];
    assert_eq!(current_section(&boxes, 100.0), Some(0));
}

#[test]
fn no_section_on_line() {
    let boxes = [SectionBox { top: 300.0, bottom: 900.0, offset_top: 900.0 }];
    assert_eq!(current_section(&boxes, 100.0), None);
    assert_eq!(current_section(&[], 100.0), None);
}

#[test]
fn step_moves_one_section() {
    assert_eq!(step(1, 3, NavKey::Down), Some(2));
    assert_eq!(step(1, 3, NavKey::Up), Some(0));
}

#[test]
fn up_from_first_section_stays_clamped() {
    assert_eq!(step(0, 3, NavKey::Up), Some(0));
}

#[test]
fn down_from_last_section_stays_clamped() {
    assert_eq!(step(2, 3, NavKey::Down), Some(2));
}

#[test]
fn step_handles_degenerate_inputs() {
    assert_eq!(step(0, 0, NavKey::Down), None);
    assert_eq!(step(0, 1, NavKey::Down), Some(0));
    assert_eq!(step(9, 3, NavKey::Up), Some(1));
    assert_eq!(step(0, 3, NavKey::Escape), None);
}

// =============================================================
// Scroll targets
// =============================================================

#[test]
fn scroll_target_leaves_header_gap() {
    let config = NavigationConfig::default();
    assert_eq!(scroll_target(600.0, &config), 580.0);
    assert_eq!(scroll_target(5.0, &config), 0.0);
}

#[test]
fn arrow_target_scrolls_to_neighbour() {
    let config = NavigationConfig::default();
    assert_eq!(arrow_target(&sections(), NavKey::Down, &config), Some(1180.0));
    assert_eq!(arrow_target(&sections(), NavKey::Up, &config), Some(0.0));
}

#[test]
fn arrow_target_clamps_at_last_section() {
    let config = NavigationConfig::default();
    let boxes = [
        SectionBox { top: -1300.0, bottom: -700.0, offset_top: 0.0 },
        SectionBox { top: -700.0, bottom: -100.0, offset_top: 600.0 },
        SectionBox { top: -100.0, bottom: 500.0, offset_top: 1200.0 },
    ];
    assert_eq!(arrow_target(&boxes, NavKey::Down, &config), Some(1180.0));
}

#[test]
fn arrow_target_without_current_section_is_none() {
    let config = NavigationConfig::default();
    let boxes = [SectionBox { top: 400.0, bottom: 900.0, offset_top: 400.0 }];
    assert_eq!(arrow_target(&boxes, NavKey::Down, &config), None);
    // The key is still claimed, so the page does not scroll natively either.
    assert!(claims_key(NavKey::Down, false));
}

#[test]
fn anchor_ids() {
    assert_eq!(anchor_target_id("#about"), Some("about"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("https://example.com/#about"), None);
    assert_eq!(anchor_target_id(""), None);
}
