//! Error types shared by the widget and the dashboard.
//!
//! Two flat kinds: [`ValidationError`] is raised locally before any request
//! is made, [`ApiError`] covers everything that can go wrong once a request
//! is on the wire. Neither is ever surfaced to the embedding page; call sites
//! collapse them into a transcript entry or an on-page notice.

use wasm_bindgen::JsValue;

/// A required form field was left blank.
///
/// `Display` is the warning text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in both input and output fields")]
    ExampleFieldsMissing,

    #[error("Please fill in both title and content fields")]
    DocumentFieldsMissing,

    #[error("Please enter a test query")]
    QueryMissing,

    #[error("Please select a CSV file")]
    CsvFileMissing,

    #[error("Please select a text file")]
    TextFileMissing,

    #[error("Please enter a URL")]
    UrlMissing,
}

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// `fetch` rejected: network down, CORS, DNS and the like.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status and no `{error}` payload.
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// The server answered with an `{error}` payload.
    #[error("{0}")]
    Remote(String),

    /// The body was not the JSON shape we expected.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request was superseded and cancelled on our side.
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Build a transport error out of whatever `fetch` rejected with.
    pub fn from_js(value: &JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Transport(text)
    }

    /// True when the failure happened before the server produced a status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
