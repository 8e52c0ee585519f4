//! Anchor-link and keyboard navigation wiring.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use super::{listen, query_all, window};
use crate::config::{NavigationConfig, SiteConfig};
use crate::error::PortfolioError;
use crate::navigation::{NavKey, SectionBox, anchor_target_id, arrow_target, claims_key, is_text_entry, scroll_target};

pub fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let window = window()?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;

    for anchor in query_all(&document, &config.selectors.anchor)? {
        bind_anchor(&anchor, &window, &document, &config.navigation)?;
    }

    let nav = config.navigation.clone();
    let section_selector = config.selectors.section.clone();
    let key_document = document.clone();
    listen(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(key) = NavKey::from_key(&event.key()) else {
            return;
        };
        match key {
            NavKey::Escape => blur_active(&key_document),
            NavKey::Down | NavKey::Up => {
                if !claims_key(key, focus_is_text_entry(&key_document)) {
                    return;
                }
                event.prevent_default();
                let sections = match measure_sections(&window, &key_document, &section_selector) {
                    Ok(sections) => sections,
                    Err(err) => {
                        log::debug!("section lookup failed: {err}");
                        return;
                    }
                };
                if let Some(top) = arrow_target(&sections, key, &nav) {
                    smooth_scroll(&window, top);
                }
            }
        }
    })
}

fn bind_anchor(
    anchor: &Element,
    window: &Window,
    document: &Document,
    nav: &NavigationConfig,
) -> Result<(), PortfolioError> {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = anchor_target_id(&href).map(str::to_owned) else {
        return Ok(());
    };
    let window = window.clone();
    let document = document.clone();
    let nav = nav.clone();
    listen(anchor, "click", move |event| {
        let Some(target) = document.get_element_by_id(&id) else {
            log::debug!("anchor target #{id} missing");
            return;
        };
        event.prevent_default();
        let offset_top = offset_top(&window, &target);
        smooth_scroll(&window, scroll_target(offset_top, &nav));
    })
}

fn blur_active(document: &Document) {
    let Some(active) = document.active_element() else {
        return;
    };
    if let Some(element) = active.dyn_ref::<HtmlElement>()
        && let Err(err) = element.blur()
    {
        log::debug!("blur failed: {err:?}");
    }
}

fn focus_is_text_entry(document: &Document) -> bool {
    document.active_element().is_some_and(|element| {
        let editable = element
            .dyn_ref::<HtmlElement>()
            .is_some_and(HtmlElement::is_content_editable);
        is_text_entry(&element.tag_name(), editable)
    })
}

fn measure_sections(window: &Window, document: &Document, selector: &str) -> Result<Vec<SectionBox>, PortfolioError> {
    Ok(query_all(document, selector)?
        .iter()
        .map(|section| {
            let rect = section.get_bounding_client_rect();
            SectionBox { top: rect.top(), bottom: rect.bottom(), offset_top: offset_top(window, section) }
        })
        .collect())
}

/// Document offset of `element`, falling back to its box for non-HTML elements.
fn offset_top(window: &Window, element: &Element) -> f64 {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        return f64::from(element.offset_top());
    }
    let scrolled = window.scroll_y().unwrap_or(0.0);
    element.get_bounding_client_rect().top() + scrolled
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
