//! Intersection-observer wiring for fade-in targets.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, query_all};
use crate::config::SiteConfig;
use crate::error::PortfolioError;
use crate::visibility::{FADE_IN_CLASS, VISIBLE_CLASS, VisibilityTracker};

/// Attribute linking an observed element back to its tracker slot.
const SLOT_ATTRIBUTE: &str = "data-reveal-slot";

pub fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let document = document()?;
    let targets = query_all(&document, &config.selectors.reveal)?;
    if targets.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(VisibilityTracker::new()));
    let tracker_for_cb = Rc::clone(&tracker);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(raw) = target.get_attribute(SLOT_ATTRIBUTE) else {
                continue;
            };
            let Ok(slot) = raw.parse::<usize>() else {
                continue;
            };
            if !tracker_for_cb.borrow_mut().report(slot, entry.is_intersecting()) {
                continue;
            }
            if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                log::debug!("could not reveal element: {err:?}");
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.visibility.threshold));
    options.set_root_margin(&config.visibility.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in targets {
        let slot = tracker.borrow_mut().register();
        element.set_attribute(SLOT_ATTRIBUTE, &slot.to_string())?;
        element.class_list().add_1(FADE_IN_CLASS)?;
        observer.observe(&element);
    }
    log::debug!("visibility: observing {} elements", tracker.borrow().len());
    Ok(())
}
