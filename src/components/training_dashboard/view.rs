//! Dashboard markup. `DashboardView::mount` builds every section once; the
//! `render_*` methods repaint parts of it from the view models in `render`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlAnchorElement, HtmlFormElement, HtmlInputElement};

use super::forms::{CsvImportForm, DocumentForm, ExampleForm, TextImportForm, UrlImportForm};
use super::render::{DocumentRow, ExampleRow, Listing, Preview, RagPanel, TableBody, NO_SOURCES};
use super::state::{category_options, total_categories, Section};
use super::styles;
use crate::components::modal::Modal;
use crate::dom_utils::{self, El};
use crate::models::{ExportFormat, Stats};

pub struct ExampleDialog {
    pub modal: Modal,
    pub form: Element,
    pub cancel: Element,
    input: Element,
    output: Element,
    category: Element,
}

pub struct DocumentDialog {
    pub modal: Modal,
    pub form: Element,
    pub cancel: Element,
    title: Element,
    content: Element,
    category: Element,
}

pub struct DocumentViewer {
    pub modal: Modal,
    pub done: Element,
    title: Element,
    content: Element,
}

pub struct CsvImportFields {
    pub form: Element,
    file: Element,
    input_column: Element,
    output_column: Element,
    category_column: Element,
}

pub struct TextImportFields {
    pub form: Element,
    file: Element,
    title: Element,
    category: Element,
}

pub struct UrlImportFields {
    pub form: Element,
    url: Element,
    title: Element,
    category: Element,
}

pub struct DashboardView {
    pub root: Element,
    pub notices: Element,
    pub nav: Vec<(Section, Element)>,
    sections: Vec<(Section, Element)>,

    total_examples: Element,
    total_documents: Element,
    total_categories: Element,
    rag_card: Element,
    rag_status: Element,
    rag_status_text: Element,
    pub quick_build_rag: Element,
    pub quick_sample_data: Element,
    pub quick_add_example: Element,
    pub quick_add_document: Element,

    pub example_filter: Element,
    pub add_example: Element,
    examples_body: Element,
    example_count: Element,

    pub document_filter: Element,
    pub add_document: Element,
    documents_body: Element,
    document_count: Element,

    pub rag_build: Element,
    pub rag_query: Element,
    pub rag_test: Element,
    rag_results: Element,
    rag_prompt: Element,
    rag_sources: Element,

    pub csv: CsvImportFields,
    pub text: TextImportFields,
    pub url: UrlImportFields,

    export_filter: Element,
    pub export_buttons: Vec<(ExportFormat, Element)>,

    pub example_dialog: ExampleDialog,
    pub document_dialog: DocumentDialog,
    pub viewer: DocumentViewer,
}

// ---------------------------------------------------------------------------
// Small builders
// ---------------------------------------------------------------------------

fn button(document: &Document, class: &str, label: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, "button")?.class(class).attr("type", "button")?.text(label).build())
}

fn submit(document: &Document, label: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, "button")?.class("btn btn-primary").attr("type", "submit")?.text(label).build())
}

fn input(document: &Document, id: &str, kind: &str, placeholder: &str) -> Result<Element, JsValue> {
    let el = El::new(document, "input")?.id(id).attr("type", kind)?;
    let el = if placeholder.is_empty() { el } else { el.attr("placeholder", placeholder)? };
    Ok(el.build())
}

fn textarea(document: &Document, id: &str, placeholder: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, "textarea")?.id(id).attr("placeholder", placeholder)?.build())
}

fn select(document: &Document, id: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, "select")?.id(id).build())
}

/// `<div class="form-group"><label for=..>..</label>{control}</div>`
fn labelled(document: &Document, label: &str, control: &Element) -> Result<Element, JsValue> {
    let label = El::new(document, "label")?.attr("for", &control.id())?.text(label).build();
    Ok(El::new(document, "div")?.class("form-group").child(&label)?.child(control)?.build())
}

fn heading(document: &Document, tag: &str, text: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, tag)?.text(text).build())
}

/// Returns `(table, tbody)`.
fn table(document: &Document, headers: &[&str]) -> Result<(Element, Element), JsValue> {
    let row = El::new(document, "tr")?.build();
    for h in headers {
        let th = heading(document, "th", h)?;
        row.append_child(&th)?;
    }
    let thead = El::new(document, "thead")?.child(&row)?.build();
    let tbody = El::new(document, "tbody")?.build();
    let table = El::new(document, "table")?.class("data-table").child(&thead)?.child(&tbody)?.build();
    Ok((table, tbody))
}

fn badge(document: &Document, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(El::new(document, "span")?.class(class).text(text).build())
}

fn preview_cell(document: &Document, preview: &Preview) -> Result<Element, JsValue> {
    let inner = El::new(document, "div")?.class("cell-preview").attr("title", &preview.full)?.text(&preview.short).build();
    Ok(El::new(document, "td")?.child(&inner)?.build())
}

fn placeholder_row<R>(document: &Document, columns: usize, body: &TableBody<R>) -> Result<Option<Element>, JsValue> {
    let text = match body.placeholder() {
        Some(text) => text,
        None => return Ok(None),
    };
    let class = if matches!(body, TableBody::Failed(_)) { "placeholder failed" } else { "placeholder" };
    let cell = El::new(document, "td")?.class(class).attr("colspan", &columns.to_string())?.text(text).build();
    Ok(Some(El::new(document, "tr")?.child(&cell)?.build()))
}

fn document_of(el: &Element) -> Result<Document, JsValue> {
    el.owner_document().ok_or_else(|| JsValue::from_str("dashboard is detached"))
}

fn fill_select(select: &Element, options: &[(String, String)]) -> Result<(), JsValue> {
    let document = document_of(select)?;
    let current = dom_utils::field_value(select);
    dom_utils::clear(select);
    for (value, label) in options {
        let option = El::new(&document, "option")?.attr("value", value)?.text(label).build();
        select.append_child(&option)?;
    }
    if options.iter().any(|(value, _)| *value == current) {
        dom_utils::set_field_value(select, &current);
    }
    Ok(())
}

/// First file picked in an `<input type="file">`.
fn selected_file(input: &Element) -> Option<File> {
    input.dyn_ref::<HtmlInputElement>()?.files()?.get(0)
}

pub fn reset_form(form: &Element) {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
}

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

impl DashboardView {
    pub fn mount(document: &Document, root: &Element) -> Result<Self, JsValue> {
        styles::inject(document)?;
        dom_utils::clear(root);
        root.class_list().add_1("training-dashboard")?;

        // Element ids carry the host id so several dashboards can share a page.
        let host_id = root.id();
        let scoped = |name: &str| format!("{}-{}", host_id, name);

        // Sidebar
        let nav_list = El::new(document, "ul")?.build();
        let mut nav = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let link = button(document, "nav-link", section.label())?;
            link.set_attribute("data-section", section.id())?;
            nav_list.append_child(&El::new(document, "li")?.child(&link)?.build())?;
            nav.push((section, link));
        }
        let sidebar = El::new(document, "nav")?
            .class("dashboard-sidebar")
            .child(&heading(document, "h2", "Training Center")?)?
            .child(&nav_list)?
            .build();

        let notices = El::new(document, "div")?.class("dashboard-notices").build();
        let main = El::new(document, "main")?.class("dashboard-main").child(&notices)?.build();

        let section_el = |section: Section, title: &str| -> Result<Element, JsValue> {
            Ok(El::new(document, "section")?
                .id(&scoped(section.id()))
                .class("content-section")
                .attr("data-section", section.id())?
                .child(&heading(document, "h2", title)?)?
                .build())
        };

        // Dashboard ---------------------------------------------------------
        let stat_card = |label: &str, initial: &str| -> Result<(Element, Element), JsValue> {
            let value = El::new(document, "div")?.class("stat-value").text(initial).build();
            let card = El::new(document, "div")?
                .class("card")
                .child(&value)?
                .child(&El::new(document, "div")?.class("stat-label").text(label).build())?
                .build();
            Ok((card, value))
        };
        let (examples_card, total_examples) = stat_card("Training Examples", "0")?;
        let (documents_card, total_documents) = stat_card("Documents", "0")?;
        let (categories_card, total_categories) = stat_card("Categories", "0")?;
        let (rag_card, rag_status) = stat_card("RAG Knowledge Base", "Not Built")?;
        rag_card.class_list().add_1("rag-status")?;
        let rag_status_text = El::new(document, "div")?.class("text-muted").text("Not ready").build();
        rag_card.append_child(&rag_status_text)?;

        let quick_build_rag = button(document, "btn btn-primary", "Build RAG")?;
        let quick_sample_data = button(document, "btn", "Create Sample Data")?;
        let quick_add_example = button(document, "btn btn-outline", "Add Example")?;
        let quick_add_document = button(document, "btn btn-outline", "Add Document")?;

        let dashboard = section_el(Section::Dashboard, "Dashboard")?;
        dashboard.append_child(
            &El::new(document, "div")?
                .class("stat-grid")
                .children([&examples_card, &documents_card, &categories_card, &rag_card])?
                .build(),
        )?;
        dashboard.append_child(
            &El::new(document, "div")?
                .class("card")
                .child(&heading(document, "h3", "Quick Actions")?)?
                .child(
                    &El::new(document, "div")?
                        .class("toolbar")
                        .children([&quick_build_rag, &quick_sample_data, &quick_add_example, &quick_add_document])?
                        .build(),
                )?
                .build(),
        )?;

        // Examples ----------------------------------------------------------
        let example_filter = select(document, &scoped("exampleCategoryFilter"))?;
        let add_example = button(document, "btn btn-primary", "Add Example")?;
        let example_count = El::new(document, "span")?.class("count-label").build();
        let (examples_table, examples_body) = table(document, &["Input", "Output", "Category", "Source"])?;
        let examples = section_el(Section::Examples, "Training Examples")?;
        examples.append_child(
            &El::new(document, "div")?
                .class("toolbar")
                .children([&example_filter, &add_example, &example_count])?
                .build(),
        )?;
        examples.append_child(&examples_table)?;

        // Documents ---------------------------------------------------------
        let document_filter = select(document, &scoped("documentCategoryFilter"))?;
        let add_document = button(document, "btn btn-primary", "Add Document")?;
        let document_count = El::new(document, "span")?.class("count-label").build();
        let (documents_table, documents_body) = table(document, &["Title", "Content", "Category", "Actions"])?;
        let documents = section_el(Section::Documents, "Documents")?;
        documents.append_child(
            &El::new(document, "div")?
                .class("toolbar")
                .children([&document_filter, &add_document, &document_count])?
                .build(),
        )?;
        documents.append_child(&documents_table)?;

        // RAG ---------------------------------------------------------------
        let rag_build = button(document, "btn btn-primary", "Build Knowledge Base")?;
        let rag_query = input(document, &scoped("ragQuery"), "text", "Ask something to test retrieval")?;
        let rag_test = button(document, "btn btn-primary", "Test")?;
        let rag_prompt = El::new(document, "pre")?.class("rag-prompt").build();
        let rag_sources = El::new(document, "div")?.build();
        let rag_results = El::new(document, "div")?
            .class("card hidden")
            .child(&heading(document, "h3", "Enhanced Prompt")?)?
            .child(&rag_prompt)?
            .child(&heading(document, "h3", "Relevant Documents")?)?
            .child(&rag_sources)?
            .build();
        let rag = section_el(Section::Rag, "RAG System")?;
        rag.append_child(&El::new(document, "div")?.class("card").child(&rag_build)?.build())?;
        rag.append_child(
            &El::new(document, "div")?
                .class("card")
                .child(&labelled(document, "Test query", &rag_query)?)?
                .child(&rag_test)?
                .build(),
        )?;
        rag.append_child(&rag_results)?;

        // Import ------------------------------------------------------------
        let csv = {
            let file = El::new(document, "input")?.id(&scoped("csvFile")).attr("type", "file")?.attr("accept", ".csv")?.build();
            let input_column = input(document, &scoped("inputColumn"), "text", "")?;
            input_column.set_attribute("value", "input")?;
            let output_column = input(document, &scoped("outputColumn"), "text", "")?;
            output_column.set_attribute("value", "output")?;
            let category_column = input(document, &scoped("categoryColumn"), "text", "")?;
            category_column.set_attribute("value", "category")?;
            let form = El::new(document, "form")?
                .class("card")
                .child(&heading(document, "h3", "Import CSV")?)?
                .child(&labelled(document, "CSV file", &file)?)?
                .child(&labelled(document, "Input column", &input_column)?)?
                .child(&labelled(document, "Output column", &output_column)?)?
                .child(&labelled(document, "Category column", &category_column)?)?
                .child(&submit(document, "Import CSV")?)?
                .build();
            CsvImportFields { form, file, input_column, output_column, category_column }
        };
        let text = {
            let file = El::new(document, "input")?.id(&scoped("textFile")).attr("type", "file")?.attr("accept", ".txt,.md")?.build();
            let title = input(document, &scoped("documentTitle"), "text", "Defaults to the file name")?;
            let category = input(document, &scoped("documentCategory"), "text", "general")?;
            let form = El::new(document, "form")?
                .class("card")
                .child(&heading(document, "h3", "Import Text File")?)?
                .child(&labelled(document, "Text file", &file)?)?
                .child(&labelled(document, "Title", &title)?)?
                .child(&labelled(document, "Category", &category)?)?
                .child(&submit(document, "Import Text")?)?
                .build();
            TextImportFields { form, file, title, category }
        };
        let url = {
            let url = input(document, &scoped("webUrl"), "url", "https://...")?;
            let title = input(document, &scoped("urlTitle"), "text", "Defaults to the URL")?;
            let category = input(document, &scoped("urlCategory"), "text", "web")?;
            let form = El::new(document, "form")?
                .class("card")
                .child(&heading(document, "h3", "Import from URL")?)?
                .child(&labelled(document, "URL", &url)?)?
                .child(&labelled(document, "Title", &title)?)?
                .child(&labelled(document, "Category", &category)?)?
                .child(&submit(document, "Import URL")?)?
                .build();
            UrlImportFields { form, url, title, category }
        };
        let import = section_el(Section::Import, "Import Data")?;
        import.append_child(
            &El::new(document, "div")?
                .class("import-grid")
                .children([&csv.form, &text.form, &url.form])?
                .build(),
        )?;

        // Export ------------------------------------------------------------
        let export_filter = select(document, &scoped("exportCategory"))?;
        let mut export_buttons = Vec::with_capacity(ExportFormat::ALL.len());
        let export_toolbar = El::new(document, "div")?.class("toolbar").build();
        for format in ExportFormat::ALL {
            let b = button(document, "btn btn-primary", &format!("Export {}", format.as_str().to_uppercase()))?;
            export_toolbar.append_child(&b)?;
            export_buttons.push((format, b));
        }
        let export = section_el(Section::Export, "Export Data")?;
        export.append_child(
            &El::new(document, "div")?
                .class("card")
                .child(&labelled(document, "Category", &export_filter)?)?
                .child(&export_toolbar)?
                .build(),
        )?;

        let sections = vec![
            (Section::Dashboard, dashboard),
            (Section::Examples, examples),
            (Section::Documents, documents),
            (Section::Rag, rag),
            (Section::Import, import),
            (Section::Export, export),
        ];
        for (_, el) in &sections {
            main.append_child(el)?;
        }
        root.append_child(&sidebar)?;
        root.append_child(&main)?;

        // Dialogs -----------------------------------------------------------
        let example_dialog = {
            let modal = Modal::build(document, root, &scoped("addExampleModal"), "Add Training Example")?;
            let prompt = textarea(document, &scoped("exampleInput"), "User question or prompt")?;
            let answer = textarea(document, &scoped("exampleOutput"), "Expected answer")?;
            let category = input(document, &scoped("exampleCategory"), "text", "general")?;
            let cancel = button(document, "btn", "Cancel")?;
            let form = El::new(document, "form")?
                .id(&scoped("addExampleForm"))
                .child(&labelled(document, "Input", &prompt)?)?
                .child(&labelled(document, "Output", &answer)?)?
                .child(&labelled(document, "Category", &category)?)?
                .build();
            modal.body.append_child(&form)?;
            // Submit buttons live in the footer, outside the form element.
            let save = submit(document, "Save Example")?;
            save.set_attribute("form", &form.id())?;
            modal.footer.append_child(&cancel)?;
            modal.footer.append_child(&save)?;
            ExampleDialog { modal, form, cancel, input: prompt, output: answer, category }
        };
        let document_dialog = {
            let modal = Modal::build(document, root, &scoped("addDocumentModal"), "Add Document")?;
            let title = input(document, &scoped("docTitle"), "text", "Document title")?;
            let content = textarea(document, &scoped("docContent"), "Document text")?;
            let category = input(document, &scoped("docCategory"), "text", "general")?;
            let cancel = button(document, "btn", "Cancel")?;
            let form = El::new(document, "form")?
                .id(&scoped("addDocumentForm"))
                .child(&labelled(document, "Title", &title)?)?
                .child(&labelled(document, "Content", &content)?)?
                .child(&labelled(document, "Category", &category)?)?
                .build();
            modal.body.append_child(&form)?;
            let save = submit(document, "Save Document")?;
            save.set_attribute("form", &form.id())?;
            modal.footer.append_child(&cancel)?;
            modal.footer.append_child(&save)?;
            DocumentDialog { modal, form, cancel, title, content, category }
        };
        let viewer = {
            let modal = Modal::build(document, root, &scoped("viewDocumentModal"), "Document")?;
            let title = El::new(document, "h3")?.build();
            let content = El::new(document, "div")?.class("document-viewer-content").build();
            let done = button(document, "btn", "Close")?;
            modal.body.append_child(&title)?;
            modal.body.append_child(&content)?;
            modal.footer.append_child(&done)?;
            DocumentViewer { modal, done, title, content }
        };

        let view = Self {
            root: root.clone(),
            notices,
            nav,
            sections,
            total_examples,
            total_documents,
            total_categories,
            rag_card,
            rag_status,
            rag_status_text,
            quick_build_rag,
            quick_sample_data,
            quick_add_example,
            quick_add_document,
            example_filter,
            add_example,
            examples_body,
            example_count,
            document_filter,
            add_document,
            documents_body,
            document_count,
            rag_build,
            rag_query,
            rag_test,
            rag_results,
            rag_prompt,
            rag_sources,
            csv,
            text,
            url,
            export_filter,
            export_buttons,
            example_dialog,
            document_dialog,
            viewer,
        };
        view.show_section(Section::Dashboard);
        Ok(view)
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn show_section(&self, section: Section) {
        for (s, link) in &self.nav {
            dom_utils::set_active(link, *s == section);
        }
        for (s, el) in &self.sections {
            dom_utils::set_active(el, *s == section);
        }
    }

    pub fn render_stats(&self, stats: &Stats) -> Result<(), JsValue> {
        self.total_examples.set_text_content(Some(&stats.total_examples.to_string()));
        self.total_documents.set_text_content(Some(&stats.total_documents.to_string()));
        self.total_categories.set_text_content(Some(&total_categories(stats).to_string()));
        self.render_filters(stats)
    }

    /// Rebuild all three category filters, keeping each one's selection when
    /// the category still exists.
    pub fn render_filters(&self, stats: &Stats) -> Result<(), JsValue> {
        let options = category_options(stats);
        for select in [&self.example_filter, &self.document_filter, &self.export_filter] {
            fill_select(select, &options)?;
        }
        Ok(())
    }

    pub fn render_examples(&self, listing: &Listing<ExampleRow>) -> Result<(), JsValue> {
        let document = document_of(&self.root)?;
        dom_utils::clear(&self.examples_body);
        if let Some(row) = placeholder_row(&document, 4, &listing.body)? {
            self.examples_body.append_child(&row)?;
        }
        if let TableBody::Rows(rows) = &listing.body {
            for row in rows {
                let tr = El::new(&document, "tr")?
                    .child(&preview_cell(&document, &row.input)?)?
                    .child(&preview_cell(&document, &row.output)?)?
                    .child(&El::new(&document, "td")?.child(&badge(&document, "badge", &row.category)?)?.build())?
                    .child(&El::new(&document, "td")?.child(&badge(&document, "badge badge-info", &row.source)?)?.build())?
                    .build();
                self.examples_body.append_child(&tr)?;
            }
        }
        if let Some(count) = &listing.count {
            self.example_count.set_text_content(Some(count));
        }
        Ok(())
    }

    /// Repaint the documents table. Returns each row's View button so the
    /// caller can wire it up.
    pub fn render_documents(&self, listing: &Listing<DocumentRow>) -> Result<Vec<(Element, DocumentRow)>, JsValue> {
        let document = document_of(&self.root)?;
        dom_utils::clear(&self.documents_body);
        if let Some(row) = placeholder_row(&document, 4, &listing.body)? {
            self.documents_body.append_child(&row)?;
        }
        let mut buttons = Vec::new();
        if let TableBody::Rows(rows) = &listing.body {
            for row in rows {
                let view = button(&document, "btn btn-sm btn-outline", "View")?;
                let tr = El::new(&document, "tr")?
                    .child(&El::new(&document, "td")?.child(&El::new(&document, "strong")?.text(&row.title).build())?.build())?
                    .child(&El::new(&document, "td")?.child(&El::new(&document, "div")?.class("cell-preview").text(&row.excerpt).build())?.build())?
                    .child(&El::new(&document, "td")?.child(&badge(&document, "badge", &row.category)?)?.build())?
                    .child(&El::new(&document, "td")?.child(&view)?.build())?
                    .build();
                self.documents_body.append_child(&tr)?;
                buttons.push((view, row.clone()));
            }
        }
        if let Some(count) = &listing.count {
            self.document_count.set_text_content(Some(count));
        }
        Ok(buttons)
    }

    pub fn mark_rag_built(&self) -> Result<(), JsValue> {
        self.rag_status.set_text_content(Some("Built"));
        self.rag_status_text.set_text_content(Some("Ready"));
        self.rag_card.class_list().add_1("ready")
    }

    pub fn render_rag(&self, panel: &RagPanel) -> Result<(), JsValue> {
        let document = document_of(&self.root)?;
        self.rag_prompt.set_text_content(Some(&panel.enhanced_prompt));
        dom_utils::clear(&self.rag_sources);
        if panel.sources.is_empty() {
            self.rag_sources
                .append_child(&El::new(&document, "p")?.class("text-muted").text(NO_SOURCES).build())?;
        }
        for source in &panel.sources {
            let card = El::new(&document, "div")?
                .class("rag-source")
                .child(&heading(&document, "h4", &source.title)?)?
                .child(&El::new(&document, "p")?.text(&source.content).build())?
                .child(&badge(&document, "badge", &source.category)?)?
                .build();
            self.rag_sources.append_child(&card)?;
        }
        dom_utils::show(&self.rag_results);
        Ok(())
    }

    pub fn show_document(&self, title: &str, content: &str) {
        self.viewer.title.set_text_content(Some(title));
        self.viewer.content.set_text_content(Some(content));
        self.viewer.modal.show();
    }

    // -----------------------------------------------------------------------
    // Form snapshots
    // -----------------------------------------------------------------------

    pub fn example_form(&self) -> ExampleForm {
        let d = &self.example_dialog;
        ExampleForm {
            input: dom_utils::field_value(&d.input),
            output: dom_utils::field_value(&d.output),
            category: dom_utils::field_value(&d.category),
        }
    }

    pub fn document_form(&self) -> DocumentForm {
        let d = &self.document_dialog;
        DocumentForm {
            title: dom_utils::field_value(&d.title),
            content: dom_utils::field_value(&d.content),
            category: dom_utils::field_value(&d.category),
        }
    }

    pub fn rag_query_text(&self) -> String {
        dom_utils::field_value(&self.rag_query)
    }

    pub fn csv_form(&self) -> CsvImportForm<File> {
        CsvImportForm {
            file: selected_file(&self.csv.file),
            input_column: dom_utils::field_value(&self.csv.input_column),
            output_column: dom_utils::field_value(&self.csv.output_column),
            category_column: dom_utils::field_value(&self.csv.category_column),
        }
    }

    pub fn text_form(&self) -> TextImportForm<File> {
        TextImportForm {
            file: selected_file(&self.text.file),
            title: dom_utils::field_value(&self.text.title),
            category: dom_utils::field_value(&self.text.category),
        }
    }

    pub fn url_form(&self) -> UrlImportForm {
        UrlImportForm {
            url: dom_utils::field_value(&self.url.url),
            title: dom_utils::field_value(&self.url.title),
            category: dom_utils::field_value(&self.url.category),
        }
    }

    pub fn example_category(&self) -> String {
        dom_utils::field_value(&self.example_filter)
    }

    pub fn document_category(&self) -> String {
        dom_utils::field_value(&self.document_filter)
    }

    pub fn export_category(&self) -> String {
        dom_utils::field_value(&self.export_filter)
    }

    /// Start a browser download of `url` through a temporary anchor.
    pub fn trigger_download(&self, url: &str) -> Result<(), JsValue> {
        let document = document_of(&self.root)?;
        let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(url);
        anchor.set_download("");
        let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}
