//! Scroll-driven offsets for decorative background shapes.
//!
//! Pure functions of the scroll position and the shape's index; nothing is
//! retained between scroll events.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::config::ParallaxConfig;

/// Speed factor for the shape at `index`. Later shapes move slightly faster.
#[must_use]
pub fn speed(index: usize, config: &ParallaxConfig) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let position = index as f64;
    config.base_speed + position * config.speed_step
}

/// Vertical offset in pixels for the shape at `index` when scrolled `scroll_y` pixels.
#[must_use]
pub fn offset(scroll_y: f64, index: usize, config: &ParallaxConfig) -> f64 {
    scroll_y * speed(index, config)
}

/// `transform` value for the given offset.
#[must_use]
pub fn transform(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}
