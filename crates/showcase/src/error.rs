//! Setup failures of the browser layer.
//!
//! None of these reach the visitor: the affected effect is skipped and the error is
//! logged to the console.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("element `{element}` has no `{attribute}` attribute")]
    MissingAttribute { element: String, attribute: String },
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
