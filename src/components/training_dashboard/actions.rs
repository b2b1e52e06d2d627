// One async action per dashboard operation. Each runs as its own
// `spawn_local` task; the state borrow is always dropped before an await.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal, FormData};

use super::render::{self, Listing, RagPanel, TableBody};
use super::state::{Section, SectionLoad};
use super::view::reset_form;
use super::Dashboard;
use crate::dom_utils::Listener;
use crate::error::{ApiError, ValidationError};
use crate::models::{ExportFormat, Stats, StatusMessage};
use crate::toast::{self, Notice};
use crate::utils::or_default;

/// Swap in a fresh abort controller for a listing, aborting the one it
/// replaces.
fn renew_abort(slot: &RefCell<Option<AbortController>>) -> Option<AbortSignal> {
    if let Some(previous) = slot.borrow_mut().take() {
        previous.abort();
    }
    match AbortController::new() {
        Ok(controller) => {
            let signal = controller.signal();
            *slot.borrow_mut() = Some(controller);
            Some(signal)
        }
        Err(e) => {
            log::warn!("AbortController unavailable: {:?}", e);
            None
        }
    }
}

fn multipart(file: &web_sys::File, fields: &[(&'static str, String)]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob("file", file)?;
    for (name, value) in fields {
        form.append_with_str(name, value)?;
    }
    Ok(form)
}

impl Dashboard {
    pub(super) fn notify(&self, notice: Notice) {
        toast::show(&self.view.notices, &notice);
    }

    fn warn(&self, err: ValidationError) {
        self.notify(Notice::warning(err.to_string()));
    }

    fn fail(&self, action: &str, err: &ApiError) {
        log::warn!("{} failed: {}", action, err);
        self.notify(render::failure_notice(action, err));
    }

    fn succeed(&self, reply: &StatusMessage, fallback: &str) {
        self.notify(Notice::success(or_default(&reply.message, fallback)));
    }

    pub fn show_section(self: Rc<Self>, section: Section) {
        let load = self.state.borrow_mut().show(section);
        self.view.show_section(section);
        match load {
            SectionLoad::Examples => spawn_local(self.clone().load_examples()),
            SectionLoad::Documents => spawn_local(self.clone().load_documents()),
            SectionLoad::ExportFilters => {
                let stats = self.state.borrow().stats.clone();
                if let Some(stats) = stats {
                    if let Err(e) = self.view.render_filters(&stats) {
                        log::warn!("failed to rebuild export filters: {:?}", e);
                    }
                }
            }
            SectionLoad::Nothing => {}
        }
    }

    /// Paint a stats snapshot and keep it for later filter rebuilds.
    pub fn apply_stats(&self, stats: Stats) {
        if let Err(e) = self.view.render_stats(&stats) {
            log::warn!("failed to render stats: {:?}", e);
        }
        self.state.borrow_mut().stats = Some(stats);
    }

    pub async fn load_stats(self: Rc<Self>) {
        match self.api.stats().await {
            Ok(stats) => self.apply_stats(stats),
            Err(err) => {
                log::warn!("loading stats failed: {}", err);
                self.notify(render::stats_failure_notice(&err));
            }
        }
    }

    pub async fn load_examples(self: Rc<Self>) {
        let category = self.view.example_category();
        let (ticket, superseded) = self.state.borrow_mut().start_examples();
        if superseded {
            log::debug!("examples listing superseded by filter {:?}", category);
        }
        let signal = renew_abort(&self.example_abort);
        let _ = self.view.render_examples(&Listing { body: TableBody::Loading, count: None });

        let result = self.api.examples(&category, signal.as_ref()).await;
        if !self.state.borrow_mut().finish_examples(ticket) {
            log::debug!("dropping stale examples listing");
            return;
        }
        self.example_abort.borrow_mut().take();

        if let Err(e) = self.view.render_examples(&render::examples_listing(&result)) {
            log::warn!("failed to render examples: {:?}", e);
        }
    }

    pub async fn load_documents(self: Rc<Self>) {
        let category = self.view.document_category();
        let (ticket, superseded) = self.state.borrow_mut().start_documents();
        if superseded {
            log::debug!("documents listing superseded by filter {:?}", category);
        }
        let signal = renew_abort(&self.document_abort);
        let _ = self.view.render_documents(&Listing { body: TableBody::Loading, count: None });

        let result = self.api.documents(&category, signal.as_ref()).await;
        if !self.state.borrow_mut().finish_documents(ticket) {
            log::debug!("dropping stale documents listing");
            return;
        }
        self.document_abort.borrow_mut().take();

        let buttons = match self.view.render_documents(&render::documents_listing(&result)) {
            Ok(buttons) => buttons,
            Err(e) => {
                log::warn!("failed to render documents: {:?}", e);
                return;
            }
        };
        let mut listeners = Vec::with_capacity(buttons.len());
        for (button, row) in buttons {
            let weak = Rc::downgrade(&self);
            let bound = Listener::new(&button, "click", move |_| {
                if let Some(dash) = weak.upgrade() {
                    dash.view.show_document(&row.title, &row.full_content);
                }
            });
            match bound {
                Ok(listener) => listeners.push(listener),
                Err(e) => log::warn!("failed to bind View button: {:?}", e),
            }
        }
        *self.row_listeners.borrow_mut() = listeners;
    }

    pub async fn add_example(self: Rc<Self>) {
        let example = match self.view.example_form().validate() {
            Ok(example) => example,
            Err(w) => return self.warn(w),
        };
        match self.api.add_example(&example).await {
            Ok(_) => {
                self.notify(Notice::success("Training example added successfully!"));
                reset_form(&self.view.example_dialog.form);
                self.view.example_dialog.modal.hide();
                spawn_local(self.clone().load_stats());
                if self.state.borrow().is_active(Section::Examples) {
                    spawn_local(self.clone().load_examples());
                }
            }
            Err(err) => self.fail("Error adding example", &err),
        }
    }

    pub async fn add_document(self: Rc<Self>) {
        let document = match self.view.document_form().validate() {
            Ok(document) => document,
            Err(w) => return self.warn(w),
        };
        match self.api.add_document(&document).await {
            Ok(_) => {
                self.notify(Notice::success("Document added successfully!"));
                reset_form(&self.view.document_dialog.form);
                self.view.document_dialog.modal.hide();
                spawn_local(self.clone().load_stats());
                if self.state.borrow().is_active(Section::Documents) {
                    spawn_local(self.clone().load_documents());
                }
            }
            Err(err) => self.fail("Error adding document", &err),
        }
    }

    pub async fn build_rag(self: Rc<Self>) {
        self.notify(Notice::info("Building RAG knowledge base..."));
        match self.api.build_rag().await {
            Ok(reply) => {
                self.succeed(&reply, "RAG knowledge base built");
                let first_build = self.state.borrow_mut().record_rag_built();
                if first_build {
                    if let Err(e) = self.view.mark_rag_built() {
                        log::warn!("failed to update RAG status: {:?}", e);
                    }
                }
            }
            Err(err) => self.fail("Error building RAG", &err),
        }
    }

    pub async fn test_rag(self: Rc<Self>) {
        let query = match super::forms::validate_query(&self.view.rag_query_text()) {
            Ok(query) => query,
            Err(w) => return self.warn(w),
        };
        match self.api.test_rag(&query).await {
            Ok(result) => {
                if let Err(e) = self.view.render_rag(&RagPanel::from(result)) {
                    log::warn!("failed to render RAG results: {:?}", e);
                }
            }
            Err(err) => self.fail("Error testing RAG", &err),
        }
    }

    pub async fn create_sample_data(self: Rc<Self>) {
        self.notify(Notice::info("Creating sample data..."));
        match self.api.create_sample_data().await {
            Ok(reply) => {
                self.succeed(&reply, "Sample data created");
                self.clone().load_stats().await;
            }
            Err(err) => self.fail("Error creating sample data", &err),
        }
    }

    pub async fn import_csv(self: Rc<Self>) {
        let upload = match self.view.csv_form().validate() {
            Ok(upload) => upload,
            Err(w) => return self.warn(w),
        };
        let form = match multipart(&upload.file, &upload.fields) {
            Ok(form) => form,
            Err(e) => return self.fail("Error importing CSV", &ApiError::from_js(&e)),
        };

        self.notify(Notice::info("Importing CSV file..."));
        match self.api.import_csv(&form).await {
            Ok(reply) => {
                self.succeed(&reply, "CSV imported");
                reset_form(&self.view.csv.form);
                self.clone().load_stats().await;
            }
            Err(err) => self.fail("Error importing CSV", &err),
        }
    }

    pub async fn import_text(self: Rc<Self>) {
        let upload = match self.view.text_form().validate() {
            Ok(upload) => upload,
            Err(w) => return self.warn(w),
        };
        let form = match multipart(&upload.file, &upload.fields) {
            Ok(form) => form,
            Err(e) => return self.fail("Error importing text file", &ApiError::from_js(&e)),
        };

        self.notify(Notice::info("Importing text file..."));
        match self.api.import_text(&form).await {
            Ok(reply) => {
                self.succeed(&reply, "Text file imported");
                reset_form(&self.view.text.form);
                self.clone().load_stats().await;
            }
            Err(err) => self.fail("Error importing text file", &err),
        }
    }

    pub async fn import_url(self: Rc<Self>) {
        let request = match self.view.url_form().validate() {
            Ok(request) => request,
            Err(w) => return self.warn(w),
        };

        self.notify(Notice::info("Importing from URL..."));
        match self.api.import_url(&request).await {
            Ok(reply) => {
                self.succeed(&reply, "URL imported");
                reset_form(&self.view.url.form);
                self.clone().load_stats().await;
            }
            Err(err) => self.fail("Error importing from URL", &err),
        }
    }

    pub fn export(&self, format: ExportFormat) {
        let url = self.api.export_url(format, &self.view.export_category());
        if let Err(e) = self.view.trigger_download(&url) {
            log::warn!("export download failed: {:?}", e);
            return self.notify(Notice::error(format!("Error exporting data: {}", ApiError::from_js(&e))));
        }
        self.notify(render::export_notice(format.as_str()));
    }
}
