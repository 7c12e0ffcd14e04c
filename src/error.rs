use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores del arranque de la app. Se devuelven tal cual a JS.
#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("No #{0} element found")]
    MountNotFound(String),

    #[error("No window.document available")]
    NoDocument,
}

impl From<ShellError> for JsValue {
    fn from(err: ShellError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
