use super::*;

#[test]
fn click_messages() {
    assert_eq!(click_message(Platform::GitHub), "Clicked GitHub link");
    assert_eq!(click_message(Platform::LinkedIn), "Clicked LinkedIn link");
}

#[test]
fn load_message_rounds_and_clamps() {
    assert_eq!(load_message(412.6), "Page loaded in 413ms");
    assert_eq!(load_message(-3.0), "Page loaded in 0ms");
}

#[test]
fn resource_failures_for_links_and_scripts() {
    assert_eq!(
        resource_failure_message("SCRIPT", Some("/pkg/app.js"), None).as_deref(),
        Some("Failed to load external resource: /pkg/app.js")
    );
    assert_eq!(
        resource_failure_message("LINK", None, Some("/style.css")).as_deref(),
        Some("Failed to load external resource: /style.css")
    );
    assert_eq!(
        resource_failure_message("script", Some(""), Some("/fallback.js")).as_deref(),
        Some("Failed to load external resource: /fallback.js")
    );
}

#[test]
fn other_targets_are_ignored() {
    assert_eq!(resource_failure_message("IMG", Some("/me.png"), None), None);
}
