//! Shared numeric and string constants for the portfolio behavior layer.
//!
//! These are the defaults behind [`crate::config::SiteConfig`]; a page can
//! override any of them through its embedded configuration block.

// ── Typewriter ──────────────────────────────────────────────────

/// Per-character interval for the name heading, in milliseconds.
pub const NAME_CADENCE_MS: f64 = 100.0;

/// Per-character interval for generic `.typewriter-text` elements.
pub const TEXT_CADENCE_MS: f64 = 50.0;

/// Start delay for a name heading that is animated on its own.
pub const NAME_ONLY_START_MS: f64 = 500.0;

/// Start delay for the greeting line ("Hello, I'm").
pub const GREETING_START_MS: f64 = 500.0;

/// Start delay for the name when it is part of the typewriter sequence.
pub const NAME_START_MS: f64 = 1500.0;

/// Start delay for the hero description.
pub const HERO_DESCRIPTION_START_MS: f64 = 2500.0;

/// Base start delay for every remaining typewriter element.
pub const OTHER_START_BASE_MS: f64 = 3500.0;

/// Extra start delay per document position for remaining elements.
pub const OTHER_START_STEP_MS: f64 = 1000.0;

/// How long the caret lingers on the name after typing completes.
pub const NAME_CARET_HOLD_MS: f64 = 1000.0;

/// How long the caret lingers on generic text after typing completes.
pub const TEXT_CARET_HOLD_MS: f64 = 500.0;

/// Shared scheduler tick driving every typewriter.
pub const SCHEDULER_TICK_MS: u32 = 10;

/// CSS `animation-delay` step between staggered hero lines, in seconds.
pub const STAGGER_STEP_S: f64 = 0.2;

/// Caret border applied while an element is typing.
pub const CARET_BORDER: &str = "2px solid var(--primary-color)";

// ── Parallax ────────────────────────────────────────────────────

/// Speed factor of the first decorative shape.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;

/// Speed factor increment per shape index.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of the element that must be visible before it is flagged.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Root margin that fires slightly before the element reaches the viewport edge.
pub const VISIBILITY_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Navigation ──────────────────────────────────────────────────

/// Gap left above a scroll target so a fixed header does not cover it.
pub const SCROLL_OFFSET_PX: f64 = 20.0;

/// Distance from the viewport top of the line that decides the current section.
pub const SECTION_REFERENCE_LINE_PX: f64 = 100.0;

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the root element while the dark theme is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Media query reporting the platform's preferred color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Accessibility ───────────────────────────────────────────────

/// Where the skip link jumps to.
pub const SKIP_LINK_TARGET: &str = "#about";

/// Outline applied to a focused element.
pub const FOCUS_OUTLINE: &str = "2px solid var(--primary-color)";

/// Outline offset applied to a focused element.
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";
