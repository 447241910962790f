//! Error types for the browser-facing parts of the designer.
//!
//! The geometry core is total; only DOM access, image decoding, export and
//! settings parsing can fail.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum AppError {
    /// A DOM or canvas call was rejected.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The selected file is not a usable image.
    #[error("Image could not be decoded: {0}")]
    Decode(String),

    /// The raster could not be turned into a download.
    #[error("Export failed: {0}")]
    Export(String),

    /// Stored settings are not valid JSON for the current schema.
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl AppError {
    pub fn dom(value: JsValue) -> Self {
        AppError::Dom(describe_js(&value))
    }

    pub fn missing(what: &str) -> Self {
        AppError::Dom(format!("{what} is not available"))
    }
}

/// Best-effort message for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
