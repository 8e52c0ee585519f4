//! Theme wiring: root class, system-scheme subscription, optional toggle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, MediaQueryListEvent, Window};

use super::{listen, query_all, window};
use crate::config::{HostEnv, SiteConfig};
use crate::consts::{DARK_MODE_CLASS, DARK_SCHEME_QUERY};
use crate::error::PortfolioError;
use crate::theme::{Theme, ThemePreference, ThemeSelector};

/// Read the explicit preference from `localStorage`.
pub fn read_stored(window: &Window, key: &str) -> ThemePreference {
    let Ok(Some(storage)) = window.local_storage() else {
        return ThemePreference::Unset;
    };
    match storage.get_item(key) {
        Ok(value) => ThemePreference::from_stored(value.as_deref()),
        Err(_) => ThemePreference::Unset,
    }
}

fn store(window: &Window, key: &str, theme: Theme) -> Result<(), PortfolioError> {
    if let Some(storage) = window.local_storage()? {
        storage.set_item(key, theme.storage_value())?;
    }
    Ok(())
}

/// Add or remove the dark-mode class on `<html>`.
fn apply(document: &Document, theme: Theme) -> Result<(), PortfolioError> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    let classes = root.class_list();
    if theme.is_dark() {
        classes.add_1(DARK_MODE_CLASS)?;
    } else {
        classes.remove_1(DARK_MODE_CLASS)?;
    }
    Ok(())
}

pub fn init(config: &SiteConfig, env: HostEnv) -> Result<(), PortfolioError> {
    let window = window()?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;
    let selector = Rc::new(RefCell::new(ThemeSelector::new(env.stored_theme, env.system_prefers_dark)));
    let initial = selector.borrow().current();
    apply(&document, initial)?;
    log::debug!("initial theme: {initial:?}");

    if let Some(query) = window.match_media(DARK_SCHEME_QUERY)? {
        let selector = Rc::clone(&selector);
        let window = window.clone();
        let document = document.clone();
        let key = config.theme_storage_key.clone();
        listen(&query, "change", move |event| {
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            let stored = read_stored(&window, &key);
            let next = selector.borrow_mut().on_system_change(stored, event.matches());
            if let Some(theme) = next
                && let Err(err) = apply(&document, theme)
            {
                log::debug!("could not apply theme: {err}");
            }
        })?;
    }

    for toggle in query_all(&document, &config.selectors.theme_toggle)? {
        let selector = Rc::clone(&selector);
        let window = window.clone();
        let document = document.clone();
        let key = config.theme_storage_key.clone();
        listen(&toggle, "click", move |_| {
            let theme = selector.borrow_mut().toggle();
            if let Err(err) = apply(&document, theme).and_then(|()| store(&window, &key, theme)) {
                log::debug!("could not switch theme: {err}");
            }
        })?;
    }
    Ok(())
}
