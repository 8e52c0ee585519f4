use super::*;

#[test]
fn stored_value_parsing() {
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::Unset);
    assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Unset);
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Explicit(Theme::Dark));
    assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Explicit(Theme::Light));
    assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Explicit(Theme::Light));
}

#[test]
fn unset_preference_follows_dark_system() {
    let selector = ThemeSelector::new(ThemePreference::Unset, true);
    assert_eq!(selector.current(), Theme::Dark);
}

#[test]
fn unset_preference_with_light_system_is_light() {
    let selector = ThemeSelector::new(ThemePreference::Unset, false);
    assert_eq!(selector.current(), Theme::Light);
    assert!(!selector.current().is_dark());
}

#[test]
fn stored_light_overrides_dark_system_and_ignores_changes() {
    let stored = ThemePreference::from_stored(Some("light"));
    let mut selector = ThemeSelector::new(stored, true);
    assert_eq!(selector.current(), Theme::Light);

    assert_eq!(selector.on_system_change(stored, false), None);
    assert_eq!(selector.current(), Theme::Light);
    assert_eq!(selector.on_system_change(stored, true), None);
    assert_eq!(selector.current(), Theme::Light);
}

#[test]
fn stored_dark_wins_over_light_system() {
    let selector = ThemeSelector::new(ThemePreference::Explicit(Theme::Dark), false);
    assert_eq!(selector.current(), Theme::Dark);
}

#[test]
fn unset_preference_follows_live_system_changes() {
    let mut selector = ThemeSelector::new(ThemePreference::Unset, false);
    assert_eq!(selector.on_system_change(ThemePreference::Unset, true), Some(Theme::Dark));
    assert_eq!(selector.current(), Theme::Dark);
    assert_eq!(selector.on_system_change(ThemePreference::Unset, false), Some(Theme::Light));
    assert_eq!(selector.current(), Theme::Light);
}

#[test]
fn preference_recorded_elsewhere_stops_system_tracking() {
    let mut selector = ThemeSelector::new(ThemePreference::Unset, false);
    let stored = ThemePreference::Explicit(Theme::Light);
    assert_eq!(selector.on_system_change(stored, true), None);
    assert_eq!(selector.current(), Theme::Light);
    assert_eq!(selector.preference(), stored);
}

#[test]
fn cleared_preference_resumes_system_tracking() {
    let mut selector = ThemeSelector::new(ThemePreference::Explicit(Theme::Dark), false);
    assert_eq!(selector.current(), Theme::Dark);

    assert_eq!(selector.on_system_change(ThemePreference::Unset, false), Some(Theme::Light));
    assert_eq!(selector.preference(), ThemePreference::Unset);
    assert_eq!(selector.on_system_change(ThemePreference::Unset, true), Some(Theme::Dark));
}

#[test]
fn preference_recorded_then_cleared_elsewhere() {
    let mut selector = ThemeSelector::new(ThemePreference::Unset, false);
    let stored = ThemePreference::Explicit(Theme::Light);
    assert_eq!(selector.on_system_change(stored, true), None);
    assert_eq!(selector.on_system_change(ThemePreference::Unset, true), Some(Theme::Dark));
}

#[test]
fn toggle_records_explicit_choice() {
    let mut selector = ThemeSelector::new(ThemePreference::Unset, false);
    assert_eq!(selector.toggle(), Theme::Dark);
    assert_eq!(selector.preference(), ThemePreference::Explicit(Theme::Dark));

    // A choice made here pins the theme even if storage reads empty.
    assert_eq!(selector.on_system_change(ThemePreference::Unset, false), None);
    assert_eq!(selector.current(), Theme::Dark);
}

#[test]
fn storage_values_round_trip_through_parser() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(ThemePreference::from_stored(Some(theme.storage_value())), ThemePreference::Explicit(theme));
    }
}
