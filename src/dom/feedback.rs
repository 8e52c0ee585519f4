//! Card hover/touch feedback and click tracking.

use web_sys::Element;

use super::{class_names, document, listen, query_all, set_style_logged};
use crate::a11y::Platform;
use crate::config::{HostEnv, SiteConfig};
use crate::diagnostics::click_message;
use crate::error::PortfolioError;
use crate::feedback::{PointerInput, TOUCH_DEVICE_CLASS, inputs_for, pose_for};

pub fn init(config: &SiteConfig, env: HostEnv) -> Result<(), PortfolioError> {
    let document = document()?;

    if env.touch_capable
        && let Some(body) = document.body()
    {
        body.class_list().add_1(TOUCH_DEVICE_CLASS)?;
    }

    for card in query_all(&document, &config.selectors.social_card)? {
        let classes = class_names(&card);
        let platform = Platform::from_classes(classes.iter().map(String::as_str));
        listen(&card, "click", move |_| log::info!("{}", click_message(platform)))?;
        bind(&card, &inputs_for(true, false))?;
    }

    if env.touch_capable {
        for element in query_all(&document, &config.selectors.touch_feedback)? {
            bind(&element, &inputs_for(false, true))?;
        }
    }
    Ok(())
}

/// Subscribe `inputs` on `element`; each event resolves its pose from its own type.
fn bind(element: &Element, inputs: &[PointerInput]) -> Result<(), PortfolioError> {
    for input in inputs {
        let target = element.clone();
        listen(element, input.event_type(), move |event| {
            let Some(input) = PointerInput::from_event_type(&event.type_()) else {
                return;
            };
            set_style_logged(&target, "transform", pose_for(input).transform());
        })?;
    }
    Ok(())
}
