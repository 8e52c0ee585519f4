use super::*;

#[test]
fn platform_from_card_classes() {
    assert_eq!(Platform::from_classes(["social-card", "github"]), Platform::GitHub);
    assert_eq!(Platform::from_classes(["social-card", "linkedin"]), Platform::LinkedIn);
    assert_eq!(Platform::from_classes(["social-card"]), Platform::LinkedIn);
}

#[test]
fn aria_labels_name_the_platform() {
    assert_eq!(Platform::GitHub.aria_label(), "Visit my GitHub profile");
    assert_eq!(Platform::LinkedIn.aria_label(), "Visit my LinkedIn profile");
}

#[test]
fn skip_link_points_at_main_content() {
    let link = SkipLink::new("#about");
    assert_eq!(link.href, "#about");
    assert_eq!(link.text, "Skip to main content");
    assert_eq!(link.class, "skip-link");
    assert!(link.css.contains("position: absolute"));
    assert!(link.css.contains("top: -40px"));
    assert!(link.css.contains("z-index: 1000"));
}

#[test]
fn skip_link_top_tracks_focus() {
    assert_eq!(SkipLink::top(true), "6px");
    assert_eq!(SkipLink::top(false), "-40px");
}

#[test]
fn focus_outline_applied_and_removed() {
    assert_eq!(
        focus_styles(true),
        vec![("outline", "2px solid var(--primary-color)"), ("outline-offset", "2px")]
    );
    assert_eq!(focus_styles(false), vec![("outline", "none")]);
}
