//! Light/dark theme selection.
//!
//! DESIGN
//! ======
//! Two inputs decide the theme: an explicit preference recorded in storage and
//! the platform's `prefers-color-scheme` signal. A stored preference always
//! wins. Without one, the system signal governs and live changes to it are
//! followed. Storage is consulted again on every change, so clearing the
//! stored preference resumes tracking; a choice made on the page does not.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two appearances the page supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage when this theme is chosen explicitly.
    #[must_use]
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// What the preference store holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Unset,
    Explicit(Theme),
}

impl ThemePreference {
    /// Interpret a raw stored value.
    ///
    /// Any non-empty value counts as an explicit choice; only `"dark"` selects
    /// the dark theme.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Unset,
            Some("dark") => Self::Explicit(Theme::Dark),
            Some(_) => Self::Explicit(Theme::Light),
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// Theme state machine: `{Light, Dark}` driven by preference and system signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSelector {
    preference: ThemePreference,
    current: Theme,
    /// Set by [`ThemeSelector::choose`]; a choice made on this page outlives
    /// whatever storage later says.
    chosen: bool,
}

impl ThemeSelector {
    /// Resolve the initial theme from the startup snapshot.
    #[must_use]
    pub fn new(preference: ThemePreference, system_prefers_dark: bool) -> Self {
        let current = match preference {
            ThemePreference::Explicit(theme) => theme,
            ThemePreference::Unset => Theme::from_dark(system_prefers_dark),
        };
        Self { preference, current, chosen: false }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// React to a change of the system color scheme.
    ///
    /// `stored` is the preference as it reads now: another tab may have
    /// recorded or cleared one since startup. Returns the theme to apply when
    /// the change is followed, or `None` while a preference pins the theme.
    pub fn on_system_change(&mut self, stored: ThemePreference, system_prefers_dark: bool) -> Option<Theme> {
        if self.chosen {
            return None;
        }
        self.preference = stored;
        if stored.is_set() {
            return None;
        }
        self.current = Theme::from_dark(system_prefers_dark);
        Some(self.current)
    }

    /// Record an explicit choice. System changes are ignored from now on.
    pub fn choose(&mut self, theme: Theme) -> Theme {
        self.chosen = true;
        self.preference = ThemePreference::Explicit(theme);
        self.current = theme;
        theme
    }

    /// Flip the current theme and record the result as the explicit choice.
    pub fn toggle(&mut self) -> Theme {
        self.choose(self.current.toggled())
    }
}
