use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Chat endpoint
// ---------------------------------------------------------------------------

/// Body of `POST {apiUrl}/api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
    pub conversation_id: String,
}

/// Successful chat reply. The backend also reports `model`, `timestamp` and
/// `tokens_used`; we accept them but nothing renders them yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
}

// ---------------------------------------------------------------------------
// Training API
// ---------------------------------------------------------------------------

/// `GET /training/api/stats`. Category maps are name -> count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_examples: u64,
    pub total_documents: u64,
    #[serde(default)]
    pub example_categories: BTreeMap<String, u64>,
    #[serde(default)]
    pub document_categories: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleList {
    pub examples: Vec<TrainingExample>,
}

/// A document as listed. `content` is the server-side excerpt,
/// `full_content` the whole text shown in the viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingDocument {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub full_content: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<TrainingDocument>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExample {
    pub input: String,
    pub output: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RagTestRequest {
    pub query: String,
}

/// A matched source snippet returned by the RAG test endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RagDocument {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RagTestResult {
    pub enhanced_prompt: String,
    #[serde(default)]
    pub relevant_documents: Vec<RagDocument>,
}

/// `{message}` acknowledgement returned by build/import/sample-data calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UrlImportRequest {
    pub url: String,
    pub title: String,
    pub category: String,
}

/// Download formats offered by the export endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Jsonl,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Jsonl];

    /// Path segment used by `/export/{format}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_tolerates_missing_conversation_id() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        assert_eq!(reply.conversation_id, None);
    }

    #[test]
    fn chat_reply_accepts_backend_extras() {
        let body = r#"{"response":"ok","conversation_id":"c-1","model":"m","timestamp":"2024-01-01T00:00:00","tokens_used":42}"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.conversation_id.as_deref(), Some("c-1"));
        assert_eq!(reply.tokens_used, Some(42));
    }

    #[test]
    fn stats_parse_category_maps() {
        let body = r#"{"total_examples":3,"total_documents":1,"example_categories":{"a":1},"document_categories":{"b":2}}"#;
        let stats: Stats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.total_examples, 3);
        assert_eq!(stats.example_categories.get("a"), Some(&1));
        assert_eq!(stats.document_categories.get("b"), Some(&2));
    }

    #[test]
    fn rag_result_rejects_malformed_documents() {
        let body = r#"{"enhanced_prompt":"p","relevant_documents":[{"title":"t"}]}"#;
        assert!(serde_json::from_str::<RagTestResult>(body).is_err());
    }

    #[test]
    fn export_format_segments() {
        let segments: Vec<_> = ExportFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(segments, vec!["json", "csv", "jsonl"]);
    }
}
