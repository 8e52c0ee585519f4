//! In-page anchor scrolling and arrow-key section navigation.
//!
//! DESIGN
//! ======
//! The host measures sections and reports keys; everything here is a pure
//! function of those measurements so the stepping rules are testable without
//! a browser. Scroll targets leave a small gap above the target so a fixed
//! header does not cover it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::config::NavigationConfig;

/// Keys the page-level keyboard handler acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Escape,
}

impl NavKey {
    /// Classify a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Whether the page handler takes a key away from the browser.
///
/// Arrow keys always suppress native scrolling outside text entry, even when
/// no section is current and nothing else happens.
#[must_use]
pub fn claims_key(key: NavKey, text_entry: bool) -> bool {
    matches!(key, NavKey::Down | NavKey::Up) && !text_entry
}

/// A section's position: viewport-relative box plus document offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    /// `getBoundingClientRect().top`
    pub top: f64,
    /// `getBoundingClientRect().bottom`
    pub bottom: f64,
    /// `offsetTop` within the document.
    pub offset_top: f64,
}

/// Whether the focused element takes typed text, in which case arrow keys
/// belong to it rather than to section navigation.
#[must_use]
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Index of the first section straddling the reference line.
#[must_use]
pub fn current_section(sections: &[SectionBox], reference_line_px: f64) -> Option<usize> {
    sections
        .iter()
        .position(|section| section.top <= reference_line_px && section.bottom >= reference_line_px)
}

/// The neighbouring section in document order, clamped at both ends.
#[must_use]
pub fn step(current: usize, count: usize, key: NavKey) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let current = current.min(last);
    match key {
        NavKey::Down => Some((current + 1).min(last)),
        NavKey::Up => Some(current.saturating_sub(1)),
        NavKey::Escape => None,
    }
}

/// Document scroll position that places a target just below the viewport top.
#[must_use]
pub fn scroll_target(offset_top: f64, config: &NavigationConfig) -> f64 {
    (offset_top - config.scroll_offset_px).max(0.0)
}

/// Where an arrow key should scroll to, if anywhere.
#[must_use]
pub fn arrow_target(sections: &[SectionBox], key: NavKey, config: &NavigationConfig) -> Option<f64> {
    let current = current_section(sections, config.reference_line_px)?;
    let next = step(current, sections.len(), key)?;
    Some(scroll_target(sections[next].offset_top, config))
}

/// Element id referenced by an in-page link, e.g. `"#about"` gives `"about"`.
///
/// A bare `#` refers to no element.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
