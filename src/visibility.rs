//! Viewport-entry flags that drive the CSS fade-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's intersection observer reports entries; this module only
//! decides which reports flip an element to visible. The flag is monotonic:
//! scrolling an element back out never hides it again.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Class added when an element is registered, hiding it until revealed.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Class added the first time an element intersects the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Per-element visibility flags, indexed by registration order.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    flags: Vec<bool>,
}

impl VisibilityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its slot.
    pub fn register(&mut self) -> usize {
        self.flags.push(false);
        self.flags.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, slot: usize) -> bool {
        self.flags.get(slot).copied().unwrap_or(false)
    }

    /// Apply one intersection report.
    ///
    /// Returns `true` only when this report newly flags the element, so the
    /// host touches the DOM once per element. Unknown slots are ignored.
    pub fn report(&mut self, slot: usize, intersecting: bool) -> bool {
        let Some(flag) = self.flags.get_mut(slot) else {
            return false;
        };
        if *flag || !intersecting {
            return false;
        }
        *flag = true;
        true
    }
}
