//! Page-level diagnostics: load timing, body reveal, resource failures.

use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use super::{listen, listen_capturing, window};
use crate::diagnostics::{load_message, resource_failure_message};
use crate::error::PortfolioError;

pub fn init() -> Result<(), PortfolioError> {
    let window = window()?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;

    if document.ready_state() == "complete" {
        on_load(&window);
    } else {
        let loaded = window.clone();
        listen(&window, "load", move |_| on_load(&loaded))?;
    }

    // Resource errors do not bubble, so listen while capturing.
    listen_capturing(&window, "error", |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(element) = target.dyn_ref::<Element>() else {
            return;
        };
        let src = element.get_attribute("src");
        let href = element.get_attribute("href");
        if let Some(message) = resource_failure_message(&element.tag_name(), src.as_deref(), href.as_deref()) {
            log::warn!("{message}");
        }
    })
}

fn on_load(window: &Window) {
    if let Some(performance) = window.performance() {
        log::info!("{}", load_message(performance.now()));
    }
    let Some(body) = window.document().and_then(|document| document.body()) else {
        return;
    };
    let style = body.style();
    for (property, value) in [("visibility", "visible"), ("opacity", "1")] {
        if let Err(err) = style.set_property(property, value) {
            log::debug!("could not reveal body: {err:?}");
        }
    }
}
