//! Console diagnostics: click tracking, load timing, resource failures.
//!
//! Observability only; nothing here changes page behavior.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::a11y::Platform;

pub const WELCOME_BANNER: &str = "Welcome to the portfolio! Built with HTML, CSS and Rust (WebAssembly), \
     featuring typewriter animations throughout.";

/// Install the browser console logger and panic hook. Safe to call twice.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
}

#[must_use]
pub fn click_message(platform: Platform) -> String {
    format!("Clicked {platform} link")
}

#[must_use]
pub fn load_message(elapsed_ms: f64) -> String {
    format!("Page loaded in {}ms", elapsed_ms.max(0.0).round())
}

/// Warning for a failed `<link>` or `<script>` load; other targets are not ours to report.
#[must_use]
pub fn resource_failure_message(tag_name: &str, src: Option<&str>, href: Option<&str>) -> Option<String> {
    if !tag_name.eq_ignore_ascii_case("LINK") && !tag_name.eq_ignore_ascii_case("SCRIPT") {
        return None;
    }
    let url = src.filter(|s| !s.is_empty()).or(href).unwrap_or("<unknown>");
    Some(format!("Failed to load external resource: {url}"))
}
