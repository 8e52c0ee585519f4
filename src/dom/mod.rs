//! Browser wiring for the behavior layer (feature `hydrate`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule subscribes one component to its DOM events and translates
//! them into calls on the pure cores in the crate root modules. Listeners live
//! for the whole page, so their closures are leaked with `forget`.
//!
//! ERROR HANDLING
//! ==============
//! Initializers return `PortfolioError`; [`start`] logs failures and carries on
//! with the remaining initializers. Failures inside event handlers are logged at
//! debug level and otherwise ignored.

pub mod a11y;
pub mod feedback;
pub mod navigation;
pub mod page;
pub mod parallax;
pub mod theme;
pub mod typewriter;
pub mod visibility;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, HostEnv, SiteConfig};
use crate::diagnostics;
use crate::error::PortfolioError;

/// WASM entry point: install logging, then initialize once the markup is ready.
#[wasm_bindgen(start)]
pub fn start() {
    diagnostics::init_logging();
    log::info!("{}", diagnostics::WELCOME_BANNER);

    report("page", page::init());

    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("portfolio startup skipped: {err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        report("startup", listen(&document, "DOMContentLoaded", move |_| run()));
    } else {
        run();
    }
}

fn run() {
    let config = load_config();
    let env = HostEnv::read(&config);
    log::debug!("host environment: {env:?}");

    report("accessibility", a11y::init(&config));
    report("theme", theme::init(&config, env));
    report("typewriter", typewriter::init(&config));
    report("card feedback", feedback::init(&config, env));
    report("parallax", parallax::init(&config));
    report("visibility", visibility::init(&config));
    report("navigation", navigation::init(&config));
}

fn load_config() -> SiteConfig {
    let raw = document()
        .map(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .unwrap_or_default()
        .and_then(|element| element.text_content());
    SiteConfig::from_optional_json(raw.as_deref())
}

fn report(component: &str, result: Result<(), PortfolioError>) {
    if let Err(err) = result {
        log::warn!("{component} initialization failed: {err}");
    }
}

// =============================================================================
// HELPERS
// =============================================================================

pub fn window() -> Result<Window, PortfolioError> {
    web_sys::window().ok_or(PortfolioError::MissingWindow)
}

pub fn document() -> Result<Document, PortfolioError> {
    window()?.document().ok_or(PortfolioError::MissingDocument)
}

/// Subscribe `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PortfolioError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but in the capture phase so non-bubbling events are seen.
pub fn listen_capturing<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PortfolioError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback_and_bool(event, closure.as_ref().unchecked_ref(), true)?;
    closure.forget();
    Ok(())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PortfolioError> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Set an inline style property. Elements without inline style are skipped.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), PortfolioError> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    element.style().set_property(property, value)?;
    Ok(())
}

/// Like [`set_style`], for use inside event handlers.
pub fn set_style_logged(element: &Element, property: &str, value: &str) {
    if let Err(err) = set_style(element, property, value) {
        log::debug!("could not set {property}: {err}");
    }
}

pub fn class_names(element: &Element) -> Vec<String> {
    let list = element.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}
