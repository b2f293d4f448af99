//! Error types for the DOM layer

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("location error: {0}")]
    Location(String),

    /// The DOM rejected a selector (SyntaxError)
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("config error: {0}")]
    Config(#[from] serde_wasm_bindgen::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn dom(value: JsValue) -> Self {
        Error::Dom(js_message(&value))
    }

    pub(crate) fn selector(selector: &str, value: JsValue) -> Self {
        Error::Selector {
            selector: selector.to_string(),
            reason: js_message(&value),
        }
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
