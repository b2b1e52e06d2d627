use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    ChatReply, ChatRequest, DocumentList, ExampleList, ExportFormat, NewDocument, NewExample,
    RagTestRequest, RagTestResult, Stats, StatusMessage, UrlImportRequest,
};
use crate::utils::with_category;

/// Status and body of a completed fetch, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request payloads the fetch helper knows how to attach.
pub enum Body<'a> {
    Empty,
    Json(String),
    Form(&'a FormData),
}

// Thin wrapper around `window.fetch`
pub struct ApiClient;

impl ApiClient {
    // Helper function to make fetch requests. Never interprets the status;
    // callers decode with `decode_chat` / `decode_payload`.
    pub async fn fetch(
        url: &str,
        method: &str,
        body: Body<'_>,
        signal: Option<&AbortSignal>,
    ) -> Result<RawResponse, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(signal) = signal {
            opts.set_signal(Some(signal));
        }

        let headers = Headers::new().map_err(|e| ApiError::from_js(&e))?;
        match body {
            Body::Empty => {}
            Body::Json(data) => {
                headers
                    .append("Content-Type", "application/json")
                    .map_err(|e| ApiError::from_js(&e))?;
                opts.set_body(&JsValue::from_str(&data));
            }
            // The browser fills in the multipart boundary itself.
            Body::Form(form) => opts.set_body(form.as_ref()),
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(|e| ApiError::from_js(&e))?;
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no global window".into()))?;

        let aborted = || signal.map(|s| s.aborted()).unwrap_or(false);

        let resp_value = match JsFuture::from(window.fetch_with_request(&request)).await {
            Ok(value) => value,
            Err(_) if aborted() => return Err(ApiError::Aborted),
            Err(e) => return Err(ApiError::from_js(&e)),
        };
        let resp: Response = resp_value.dyn_into().map_err(|e| ApiError::from_js(&e))?;

        let text_promise = resp.text().map_err(|e| ApiError::from_js(&e))?;
        let text = match JsFuture::from(text_promise).await {
            Ok(text) => text,
            Err(_) if aborted() => return Err(ApiError::Aborted),
            Err(e) => return Err(ApiError::Decode(ApiError::from_js(&e).to_string())),
        };

        Ok(RawResponse { status: resp.status(), body: text.as_string().unwrap_or_default() })
    }

    pub async fn get<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T, ApiError> {
        let raw = Self::fetch(url, "GET", Body::Empty, signal).await?;
        decode_payload(&raw)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let raw = Self::fetch(url, "POST", Body::Json(json), None).await?;
        decode_payload(&raw)
    }

    pub async fn post_form<T: DeserializeOwned>(url: &str, form: &FormData) -> Result<T, ApiError> {
        let raw = Self::fetch(url, "POST", Body::Form(form), None).await?;
        decode_payload(&raw)
    }
}

/// Interpret a chat response: any non-2xx is an HTTP failure regardless of
/// body; a 2xx that doesn't parse counts with transport failures.
pub fn decode_chat(raw: &RawResponse) -> Result<ChatReply, ApiError> {
    if !raw.ok() {
        return Err(ApiError::Http { status: raw.status });
    }
    serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a training API response. An `{error}` payload wins over the
/// status code, since the backend reports most failures that way.
pub fn decode_payload<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    let value: serde_json::Value = match serde_json::from_str(&raw.body) {
        Ok(value) => value,
        Err(_) if !raw.ok() => return Err(ApiError::Http { status: raw.status }),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if let Some(err) = value.get("error").filter(|e| !e.is_null()) {
        let text = err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string());
        return Err(ApiError::Remote(text));
    }
    if !raw.ok() {
        return Err(ApiError::Http { status: raw.status });
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------------
// Chat endpoint
// ---------------------------------------------------------------------------

/// Client for the chat backend used by the widget.
#[derive(Clone, Debug)]
pub struct ChatApi {
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    pub async fn send(&self, request: &ChatRequest, signal: Option<&AbortSignal>) -> Result<ChatReply, ApiError> {
        let json = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let raw = ApiClient::fetch(&self.endpoint(), "POST", Body::Json(json), signal).await?;
        decode_chat(&raw)
    }
}

// ---------------------------------------------------------------------------
// Training API
// ---------------------------------------------------------------------------

/// Client for the `/training/api` surface used by the dashboard.
#[derive(Clone, Debug, Default)]
pub struct TrainingApi {
    config: ApiConfig,
}

impl TrainingApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn stats_url(&self) -> String {
        self.config.url("/stats")
    }

    pub fn examples_url(&self, category: &str) -> String {
        with_category(&self.config.url("/examples"), category)
    }

    pub fn documents_url(&self, category: &str) -> String {
        with_category(&self.config.url("/documents"), category)
    }

    pub fn export_url(&self, format: ExportFormat, category: &str) -> String {
        with_category(&self.config.url(&format!("/export/{}", format.as_str())), category)
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        ApiClient::get(&self.stats_url(), None).await
    }

    pub async fn examples(&self, category: &str, signal: Option<&AbortSignal>) -> Result<ExampleList, ApiError> {
        ApiClient::get(&self.examples_url(category), signal).await
    }

    pub async fn documents(&self, category: &str, signal: Option<&AbortSignal>) -> Result<DocumentList, ApiError> {
        ApiClient::get(&self.documents_url(category), signal).await
    }

    pub async fn add_example(&self, example: &NewExample) -> Result<StatusMessage, ApiError> {
        ApiClient::post_json(&self.config.url("/examples"), example).await
    }

    pub async fn add_document(&self, document: &NewDocument) -> Result<StatusMessage, ApiError> {
        ApiClient::post_json(&self.config.url("/documents"), document).await
    }

    pub async fn build_rag(&self) -> Result<StatusMessage, ApiError> {
        ApiClient::get(&self.config.url("/rag/build"), None).await
    }

    pub async fn test_rag(&self, query: &RagTestRequest) -> Result<RagTestResult, ApiError> {
        ApiClient::post_json(&self.config.url("/rag/test"), query).await
    }

    pub async fn create_sample_data(&self) -> Result<StatusMessage, ApiError> {
        ApiClient::get(&self.config.url("/create-sample-data"), None).await
    }

    pub async fn import_csv(&self, form: &FormData) -> Result<StatusMessage, ApiError> {
        ApiClient::post_form(&self.config.url("/import/csv"), form).await
    }

    pub async fn import_text(&self, form: &FormData) -> Result<StatusMessage, ApiError> {
        ApiClient::post_form(&self.config.url("/import/text"), form).await
    }

    pub async fn import_url(&self, request: &UrlImportRequest) -> Result<StatusMessage, ApiError> {
        ApiClient::post_json(&self.config.url("/import/url"), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn chat_non_2xx_is_http_failure_even_with_json_body() {
        let err = decode_chat(&raw(500, r#"{"error":"Failed to get AI response"}"#)).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500 });
    }

    #[test]
    fn chat_garbage_body_counts_as_transport_failure() {
        let err = decode_chat(&raw(200, "<html>")).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn chat_success_decodes_reply() {
        let reply = decode_chat(&raw(200, r#"{"response":"hi","conversation_id":"c-9"}"#)).unwrap();
        assert_eq!(reply.response, "hi");
        assert_eq!(reply.conversation_id.as_deref(), Some("c-9"));
    }

    #[test]
    fn error_payload_on_2xx_is_remote_failure() {
        let err = decode_payload::<Stats>(&raw(200, r#"{"error":"db locked"}"#)).unwrap_err();
        assert_eq!(err, ApiError::Remote("db locked".into()));
    }

    #[test]
    fn error_payload_wins_over_status() {
        let err = decode_payload::<StatusMessage>(&raw(400, r#"{"error":"no file"}"#)).unwrap_err();
        assert_eq!(err, ApiError::Remote("no file".into()));
    }

    #[test]
    fn non_json_error_page_is_http_failure() {
        let err = decode_payload::<StatusMessage>(&raw(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502 });
    }

    #[test]
    fn wrong_shape_is_decode_failure() {
        let err = decode_payload::<ExampleList>(&raw(200, r#"{"items":[]}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn null_error_field_is_ignored() {
        let msg: StatusMessage = decode_payload(&raw(200, r#"{"message":"done","error":null}"#)).unwrap();
        assert_eq!(msg.message, "done");
    }

    #[test]
    fn chat_endpoint_trims_base() {
        assert_eq!(ChatApi::new("http://localhost:8000/").endpoint(), "http://localhost:8000/api/chat");
    }

    #[test]
    fn training_urls_encode_category() {
        let api = TrainingApi::new(ApiConfig::from_url("/training/api"));
        assert_eq!(api.examples_url(""), "/training/api/examples");
        assert_eq!(api.documents_url("how to"), "/training/api/documents?category=how+to");
        assert_eq!(
            api.export_url(ExportFormat::Jsonl, "faq"),
            "/training/api/export/jsonl?category=faq"
        );
    }
}
