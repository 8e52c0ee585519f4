//! Hover and touch feedback for interactive cards.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Body class marking a touch-capable document.
pub const TOUCH_DEVICE_CLASS: &str = "touch-device";

/// Pointer and touch events a card reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    TouchStart,
    TouchEnd,
}

impl PointerInput {
    /// Map a DOM event type to an input.
    #[must_use]
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" => Some(Self::Enter),
            "mouseleave" => Some(Self::Leave),
            "touchstart" => Some(Self::TouchStart),
            "touchend" => Some(Self::TouchEnd),
            _ => None,
        }
    }

    #[must_use]
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
        }
    }
}

/// Visual pose of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPose {
    /// Pointer resting state after a hover.
    #[default]
    Resting,
    Lifted,
    Pressed,
    /// Touch released.
    Released,
}

impl CardPose {
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Resting => "translateY(0) scale(1)",
            Self::Lifted => "translateY(-8px) scale(1.02)",
            Self::Pressed => "scale(0.98)",
            Self::Released => "scale(1)",
        }
    }
}

/// Pose a card takes in response to `input`.
#[must_use]
pub fn pose_for(input: PointerInput) -> CardPose {
    match input {
        PointerInput::Enter => CardPose::Lifted,
        PointerInput::Leave => CardPose::Resting,
        PointerInput::TouchStart => CardPose::Pressed,
        PointerInput::TouchEnd => CardPose::Released,
    }
}

/// Inputs to subscribe for a card, given the platform's touch support.
#[must_use]
pub fn inputs_for(hover: bool, touch_capable: bool) -> Vec<PointerInput> {
    let mut inputs = Vec::with_capacity(4);
    if hover {
        inputs.extend([PointerInput::Enter, PointerInput::Leave]);
    }
    if touch_capable {
        inputs.extend([PointerInput::TouchStart, PointerInput::TouchEnd]);
    }
    inputs
}
