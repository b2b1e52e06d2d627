//! Dashboard state: active section, last stats snapshot and the request
//! trackers for the two listings.

use std::collections::BTreeSet;

use crate::constants::ALL_CATEGORIES_LABEL;
use crate::models::Stats;
use crate::network::{InFlight, Ticket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Examples,
    Documents,
    Rag,
    Import,
    Export,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Examples,
        Section::Documents,
        Section::Rag,
        Section::Import,
        Section::Export,
    ];

    /// DOM id of the section's content element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Examples => "examples",
            Section::Documents => "documents",
            Section::Rag => "rag",
            Section::Import => "import",
            Section::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Examples => "Training Examples",
            Section::Documents => "Documents",
            Section::Rag => "RAG System",
            Section::Import => "Import Data",
            Section::Export => "Export Data",
        }
    }
}

/// Data a section needs fetched or refreshed when it becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionLoad {
    Nothing,
    Examples,
    Documents,
    ExportFilters,
}

#[derive(Debug)]
pub struct DashboardState {
    pub section: Section,
    pub stats: Option<Stats>,
    rag_built: bool,
    examples: InFlight,
    documents: InFlight,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            section: Section::Dashboard,
            stats: None,
            rag_built: false,
            examples: InFlight::new(),
            documents: InFlight::new(),
        }
    }

    /// Switch sections and report what must be loaded for the new one.
    pub fn show(&mut self, section: Section) -> SectionLoad {
        self.section = section;
        match section {
            Section::Examples => SectionLoad::Examples,
            Section::Documents => SectionLoad::Documents,
            // Filters are only rebuilt from a snapshot we already have.
            Section::Export if self.stats.is_some() => SectionLoad::ExportFilters,
            _ => SectionLoad::Nothing,
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.section == section
    }

    /// Begin an examples listing. The flag is true when an older listing
    /// request was superseded.
    pub fn start_examples(&mut self) -> (Ticket, bool) {
        self.examples.start()
    }

    /// Accept the listing response behind `ticket`; false means it is stale.
    pub fn finish_examples(&mut self, ticket: Ticket) -> bool {
        self.examples.settle(ticket)
    }

    pub fn start_documents(&mut self) -> (Ticket, bool) {
        self.documents.start()
    }

    pub fn finish_documents(&mut self, ticket: Ticket) -> bool {
        self.documents.settle(ticket)
    }

    /// Record a successful knowledge-base build. Returns true only for the
    /// first one, when the status card still needs updating.
    pub fn record_rag_built(&mut self) -> bool {
        !std::mem::replace(&mut self.rag_built, true)
    }

    pub fn rag_built(&self) -> bool {
        self.rag_built
    }
}

/// `(value, label)` pairs for a category `<select>`: "All Categories" first,
/// then every category of either kind exactly once, sorted.
pub fn category_options(stats: &Stats) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), ALL_CATEGORIES_LABEL.to_string())];
    options.extend(category_union(stats).into_iter().map(|c| (c.to_string(), c.to_string())));
    options
}

/// Number of distinct category names across examples and documents.
pub fn total_categories(stats: &Stats) -> usize {
    category_union(stats).len()
}

fn category_union(stats: &Stats) -> BTreeSet<&str> {
    stats
        .example_categories
        .keys()
        .chain(stats.document_categories.keys())
        .map(String::as_str)
        .collect()
}
