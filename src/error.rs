//! Error type for the browser glue layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is ever shown to the visitor. Initializers return these errors
//! to the startup entry point, which logs them and moves on to the next
//! initializer.

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
