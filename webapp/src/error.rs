use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum LikeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("element is missing the {0} attribute")]
    MissingAttribute(&'static str),

    #[error("no count display with id {0:?}")]
    MissingDisplay(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl LikeError {
    pub(crate) fn transport(value: JsValue) -> Self {
        LikeError::Transport(js_message(&value))
    }

    pub(crate) fn dom(value: JsValue) -> Self {
        LikeError::Dom(js_message(&value))
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    }
}

impl From<LikeError> for JsValue {
    fn from(err: LikeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
