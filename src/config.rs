//! Site configuration and the startup environment snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteConfig` carries every timing, selector and constant the components use.
//! A page may override any subset by embedding a JSON block; absent fields keep
//! their defaults. `HostEnv` captures the handful of global facts (stored theme,
//! system color scheme, touch support) once at startup so components receive
//! them explicitly instead of reaching for ambient browser state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::PortfolioError;
use crate::theme::ThemePreference;

/// Element id of the optional embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Typewriter timings, all in milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub name_cadence_ms: f64,
    pub text_cadence_ms: f64,
    pub name_only_start_ms: f64,
    pub greeting_start_ms: f64,
    pub name_start_ms: f64,
    pub hero_description_start_ms: f64,
    pub other_start_base_ms: f64,
    pub other_start_step_ms: f64,
    pub name_caret_hold_ms: f64,
    pub text_caret_hold_ms: f64,
    pub tick_ms: u32,
    /// CSS `animation-delay` step for staggered hero lines, in seconds.
    pub stagger_step_s: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            name_cadence_ms: consts::NAME_CADENCE_MS,
            text_cadence_ms: consts::TEXT_CADENCE_MS,
            name_only_start_ms: consts::NAME_ONLY_START_MS,
            greeting_start_ms: consts::GREETING_START_MS,
            name_start_ms: consts::NAME_START_MS,
            hero_description_start_ms: consts::HERO_DESCRIPTION_START_MS,
            other_start_base_ms: consts::OTHER_START_BASE_MS,
            other_start_step_ms: consts::OTHER_START_STEP_MS,
            name_caret_hold_ms: consts::NAME_CARET_HOLD_MS,
            text_caret_hold_ms: consts::TEXT_CARET_HOLD_MS,
            tick_ms: consts::SCHEDULER_TICK_MS,
            stagger_step_s: consts::STAGGER_STEP_S,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    pub speed_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { base_speed: consts::PARALLAX_BASE_SPEED, speed_step: consts::PARALLAX_SPEED_STEP }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { threshold: consts::VISIBILITY_THRESHOLD, root_margin: consts::VISIBILITY_ROOT_MARGIN.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_offset_px: f64,
    pub reference_line_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { scroll_offset_px: consts::SCROLL_OFFSET_PX, reference_line_px: consts::SECTION_REFERENCE_LINE_PX }
    }
}

/// CSS selectors describing the markup contract.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub stagger: String,
    pub name: String,
    pub typewriter: String,
    pub social_card: String,
    pub touch_feedback: String,
    pub shape: String,
    pub reveal: String,
    pub anchor: String,
    pub section: String,
    pub focusable: String,
    pub theme_toggle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            stagger: ".text-animation h1, .text-animation p".to_owned(),
            name: ".name".to_owned(),
            typewriter: ".typewriter-text".to_owned(),
            social_card: ".social-card".to_owned(),
            touch_feedback: ".social-card, .btn".to_owned(),
            shape: ".shape".to_owned(),
            reveal: ".section-header, .highlight-item, .social-card".to_owned(),
            anchor: "a[href^=\"#\"]".to_owned(),
            section: "section[id]".to_owned(),
            focusable: "a, button, input, textarea, select".to_owned(),
            theme_toggle: "[data-theme-toggle]".to_owned(),
        }
    }
}

/// Everything the behavior layer can be tuned with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub typewriter: TypewriterConfig,
    pub parallax: ParallaxConfig,
    pub visibility: VisibilityConfig,
    pub navigation: NavigationConfig,
    pub selectors: Selectors,
    pub skip_link_target: String,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typewriter: TypewriterConfig::default(),
            parallax: ParallaxConfig::default(),
            visibility: VisibilityConfig::default(),
            navigation: NavigationConfig::default(),
            selectors: Selectors::default(),
            skip_link_target: consts::SKIP_LINK_TARGET.to_owned(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an embedded configuration block. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional block, falling back to defaults when it is absent or invalid.
    #[must_use]
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring site configuration: {err}");
                Self::default()
            }
        }
    }
}

/// Global facts read once at startup and handed to the components that need them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostEnv {
    pub stored_theme: ThemePreference,
    pub system_prefers_dark: bool,
    pub touch_capable: bool,
}

impl HostEnv {
    /// Snapshot the browser environment.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn read(config: &SiteConfig) -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let stored_theme = crate::dom::theme::read_stored(&window, &config.theme_storage_key);
        let system_prefers_dark = match window.match_media(consts::DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        };
        let touch_capable = js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        Self { stored_theme, system_prefers_dark, touch_capable }
    }
}
