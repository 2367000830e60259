//! Error type shared by the network layer and the command executors.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `fetch` rejected or the body could not be read.
    #[error("{0}")]
    Transport(String),

    /// The body was not JSON, or not the JSON we expected.
    #[error("{0}")]
    Decode(String),

    /// The service answered with an `error` field.
    #[error("{0}")]
    Remote(String),

    #[error("{0}")]
    Dom(String),
}

impl ApiError {
    /// Text shown to the user. Service errors are shown verbatim, everything
    /// else is prefixed with what we were trying to do.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            ApiError::Remote(msg) => msg.clone(),
            other => format!("{}: {}", context, other),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Transport(js_error_message(&value))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Best-effort extraction of a readable message from a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(s) = value.as_string() {
        return s;
    }
    format!("{:?}", value)
}
