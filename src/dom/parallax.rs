//! Parallax wiring: re-offset every decorative shape on scroll.

use super::{listen, query_all, set_style_logged, window};
use crate::config::SiteConfig;
use crate::error::PortfolioError;
use crate::parallax::{offset, transform};

pub fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let window = window()?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;
    let shapes = query_all(&document, &config.selectors.shape)?;
    if shapes.is_empty() {
        return Ok(());
    }

    let parallax = config.parallax.clone();
    let scroll_source = window.clone();
    listen(&window, "scroll", move |_| {
        let scrolled = match scroll_source.scroll_y() {
            Ok(y) => y.max(0.0),
            Err(err) => {
                log::debug!("scroll position unavailable: {err:?}");
                return;
            }
        };
        for (index, shape) in shapes.iter().enumerate() {
            set_style_logged(shape, "transform", &transform(offset(scrolled, index, &parallax)));
        }
    })
}
