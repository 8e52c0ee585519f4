use super::*;

#[test]
fn hover_lifts_and_restores() {
    assert_eq!(pose_for(PointerInput::Enter).transform(), "translateY(-8px) scale(1.02)");
    assert_eq!(pose_for(PointerInput::Leave).transform(), "translateY(0) scale(1)");
}

#[test]
fn touch_presses_and_releases() {
    assert_eq!(pose_for(PointerInput::TouchStart).transform(), "scale(0.98)");
    assert_eq!(pose_for(PointerInput::TouchEnd).transform(), "scale(1)");
}

#[test]
fn event_types_map_both_ways() {
    for input in [PointerInput::Enter, PointerInput::Leave, PointerInput::TouchStart, PointerInput::TouchEnd] {
        assert_eq!(PointerInput::from_event_type(input.event_type()), Some(input));
    }
    assert_eq!(PointerInput::from_event_type("click"), None);
}

#[test]
fn touch_inputs_only_on_touch_devices() {
    assert_eq!(inputs_for(true, false), vec![PointerInput::Enter, PointerInput::Leave]);
    assert_eq!(
        inputs_for(true, true),
        vec![PointerInput::Enter, PointerInput::Leave, PointerInput::TouchStart, PointerInput::TouchEnd]
    );
    assert_eq!(inputs_for(false, true), vec![PointerInput::TouchStart, PointerInput::TouchEnd]);
    assert!(inputs_for(false, false).is_empty());
}

#[test]
fn default_pose_is_resting() {
    assert_eq!(CardPose::default(), CardPose::Resting);
}
