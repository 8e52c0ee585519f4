//! Accessibility affordances: card labels, skip link, focus outlines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once at startup. The skip link is inserted as the first focusable
//! element of the body and slides into view only while it has keyboard focus.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

use std::fmt;

use crate::consts;

/// Social platform a card links to, read from its classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    GitHub,
    LinkedIn,
}

impl Platform {
    /// Cards without a recognised class are treated as `LinkedIn`.
    #[must_use]
    pub fn from_classes<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        if classes.into_iter().any(|class| class == "github") {
            Self::GitHub
        } else {
            Self::LinkedIn
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
        }
    }

    #[must_use]
    pub fn aria_label(self) -> String {
        format!("Visit my {self} profile")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

/// `top` while the skip link is parked above the viewport.
pub const SKIP_LINK_HIDDEN_TOP: &str = "-40px";

/// `top` while the skip link has focus.
pub const SKIP_LINK_FOCUSED_TOP: &str = "6px";

/// Everything needed to build the skip link element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipLink {
    pub href: String,
    pub text: &'static str,
    pub class: &'static str,
    pub css: String,
}

impl SkipLink {
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self { href: target.to_owned(), text: SKIP_LINK_TEXT, class: SKIP_LINK_CLASS, css: skip_link_css() }
    }

    /// `top` for the given focus state.
    #[must_use]
    pub fn top(focused: bool) -> &'static str {
        if focused { SKIP_LINK_FOCUSED_TOP } else { SKIP_LINK_HIDDEN_TOP }
    }
}

fn skip_link_css() -> String {
    format!(
        "position: absolute; top: {SKIP_LINK_HIDDEN_TOP}; left: 6px; background: var(--primary-color); \
         color: white; padding: 8px; text-decoration: none; border-radius: 4px; z-index: 1000;"
    )
}

/// Style properties to set on a focused or blurred element.
#[must_use]
pub fn focus_styles(focused: bool) -> Vec<(&'static str, &'static str)> {
    if focused {
        vec![("outline", consts::FOCUS_OUTLINE), ("outline-offset", consts::FOCUS_OUTLINE_OFFSET)]
    } else {
        vec![("outline", "none")]
    }
}
