//! Pure view models for the dashboard: what a listing, a notice or the RAG
//! panel should show for a given API result. `view` turns these into DOM.

use crate::constants::PREVIEW_MAX_CHARS;
use crate::error::ApiError;
use crate::models::{DocumentList, ExampleList, RagDocument, RagTestResult, TrainingDocument, TrainingExample};
use crate::toast::Notice;
use crate::utils::truncate_preview;

/// Contents of a listing's table body.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<R> {
    Loading,
    Rows(Vec<R>),
    /// Single centred placeholder row.
    Empty(&'static str),
    Failed(String),
}

impl<R> TableBody<R> {
    /// Text for a single full-width row, if the body is not a list of rows.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            TableBody::Loading => Some("Loading..."),
            TableBody::Empty(text) => Some(*text),
            TableBody::Failed(text) => Some(text.as_str()),
            TableBody::Rows(_) => None,
        }
    }
}

/// A cell preview together with the full text for its tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub short: String,
    pub full: String,
}

impl Preview {
    pub fn of(text: &str) -> Self {
        Self { short: truncate_preview(text, PREVIEW_MAX_CHARS), full: text.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleRow {
    pub input: Preview,
    pub output: Preview,
    pub category: String,
    pub source: String,
}

impl From<&TrainingExample> for ExampleRow {
    fn from(ex: &TrainingExample) -> Self {
        Self {
            input: Preview::of(&ex.input),
            output: Preview::of(&ex.output),
            category: ex.category.clone(),
            source: ex.source.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    /// Shown by the View button.
    pub full_content: String,
}

impl From<&TrainingDocument> for DocumentRow {
    fn from(doc: &TrainingDocument) -> Self {
        let full_content = if doc.full_content.is_empty() { doc.content.clone() } else { doc.full_content.clone() };
        Self { title: doc.title.clone(), excerpt: doc.content.clone(), category: doc.category.clone(), full_content }
    }
}

/// A rendered listing: table body plus the count label (kept unchanged on
/// failure).
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<R> {
    pub body: TableBody<R>,
    pub count: Option<String>,
}

fn listing_failure(err: &ApiError) -> String {
    match err {
        ApiError::Remote(msg) => msg.clone(),
        other => format!("Error: {}", other),
    }
}

pub fn examples_listing(result: &Result<ExampleList, ApiError>) -> Listing<ExampleRow> {
    match result {
        Ok(list) if list.examples.is_empty() => {
            Listing { body: TableBody::Empty("No examples found"), count: Some("0 examples".into()) }
        }
        Ok(list) => Listing {
            body: TableBody::Rows(list.examples.iter().map(ExampleRow::from).collect()),
            count: Some(format!("{} examples", list.examples.len())),
        },
        Err(err) => Listing { body: TableBody::Failed(listing_failure(err)), count: None },
    }
}

pub fn documents_listing(result: &Result<DocumentList, ApiError>) -> Listing<DocumentRow> {
    match result {
        Ok(list) if list.documents.is_empty() => {
            Listing { body: TableBody::Empty("No documents found"), count: Some("0 documents".into()) }
        }
        Ok(list) => Listing {
            body: TableBody::Rows(list.documents.iter().map(DocumentRow::from).collect()),
            count: Some(format!("{} documents", list.documents.len())),
        },
        Err(err) => Listing { body: TableBody::Failed(listing_failure(err)), count: None },
    }
}

/// Error notice for a failed action. `{error}` payloads are shown as
/// `Error: <payload>`; anything else gets the action's own prefix.
pub fn failure_notice(action: &str, err: &ApiError) -> Notice {
    match err {
        ApiError::Remote(msg) => Notice::error(format!("Error: {}", msg)),
        other => Notice::error(format!("{}: {}", action, other)),
    }
}

pub fn stats_failure_notice(err: &ApiError) -> Notice {
    match err {
        ApiError::Remote(msg) => Notice::error(format!("Error loading stats: {}", msg)),
        other => Notice::error(format!("Error loading statistics: {}", other)),
    }
}

pub fn export_notice(format: &str) -> Notice {
    Notice::info(format!("Exporting data in {} format...", format.to_uppercase()))
}

/// What the RAG test panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct RagPanel {
    pub enhanced_prompt: String,
    /// Empty means "No relevant documents found".
    pub sources: Vec<RagDocument>,
}

impl From<RagTestResult> for RagPanel {
    fn from(result: RagTestResult) -> Self {
        Self { enhanced_prompt: result.enhanced_prompt, sources: result.relevant_documents }
    }
}

pub const NO_SOURCES: &str = "No relevant documents found";
