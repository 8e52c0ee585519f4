//! Accessibility wiring: ARIA labels, skip link, focus outlines.

use super::{class_names, document, listen, query_all, set_style_logged};
use crate::a11y::{Platform, SkipLink, focus_styles};
use crate::config::SiteConfig;
use crate::error::PortfolioError;

pub fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let document = document()?;
    let body = document.body().ok_or(PortfolioError::MissingBody)?;

    for card in query_all(&document, &config.selectors.social_card)? {
        let classes = class_names(&card);
        let platform = Platform::from_classes(classes.iter().map(String::as_str));
        card.set_attribute("aria-label", &platform.aria_label())?;
    }

    let skip = SkipLink::new(&config.skip_link_target);
    let link = document.create_element("a")?;
    link.set_attribute("href", &skip.href)?;
    link.set_text_content(Some(skip.text));
    link.set_class_name(skip.class);
    link.set_attribute("style", &skip.css)?;
    for (event, focused) in [("focus", true), ("blur", false)] {
        let target = link.clone();
        listen(&link, event, move |_| set_style_logged(&target, "top", SkipLink::top(focused)))?;
    }
    body.insert_before(&link, body.first_child().as_ref())?;

    // Queried after the skip link is in place so it gets an outline too.
    for element in query_all(&document, &config.selectors.focusable)? {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let target = element.clone();
            listen(&element, event, move |_| {
                for (property, value) in focus_styles(focused) {
                    set_style_logged(&target, property, value);
                }
            })?;
        }
    }
    Ok(())
}
