//! Training-data admin dashboard.
//!
//! Mounted into an existing element (by default `#training-dashboard`).
//! It builds its own sidebar, sections and dialogs, then talks to the
//! training API under [`ApiConfig`]'s base URL.

mod actions;
pub mod forms;
pub mod render;
pub mod state;
mod styles;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, Document, Event, EventTarget};

use crate::constants::DASHBOARD_ROOT_ID;
use crate::dom_utils::Listener;
use crate::network::{ApiConfig, TrainingApi};
use state::DashboardState;
use view::DashboardView;

pub struct Dashboard {
    view: DashboardView,
    state: RefCell<DashboardState>,
    api: TrainingApi,
    listeners: RefCell<Vec<Listener>>,
    /// Listeners of the current documents table's View buttons.
    row_listeners: RefCell<Vec<Listener>>,
    example_abort: RefCell<Option<AbortController>>,
    document_abort: RefCell<Option<AbortController>>,
}

thread_local! {
    // Mounted dashboards by host element id. Listeners only hold weak
    // handles, so this is what keeps a dashboard alive.
    static MOUNTED: RefCell<Vec<(String, Rc<Dashboard>)>> = RefCell::new(Vec::new());
}

/// Mount the dashboard into the element with id `element_id`, replacing a
/// dashboard previously mounted there.
#[wasm_bindgen(js_name = mountTrainingDashboard)]
pub fn mount_training_dashboard(element_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let dashboard = mount(&document, element_id, ApiConfig::default())?;

    MOUNTED.with(|mounted| {
        let mut mounted = mounted.borrow_mut();
        mounted.retain(|(id, _)| id != element_id);
        mounted.push((element_id.to_string(), dashboard));
    });
    Ok(())
}

/// Mount into `#training-dashboard` if the page has one.
pub fn auto_mount(document: &Document) -> Result<bool, JsValue> {
    if document.get_element_by_id(DASHBOARD_ROOT_ID).is_none() {
        return Ok(false);
    }
    mount_training_dashboard(DASHBOARD_ROOT_ID)?;
    Ok(true)
}

pub fn mount(document: &Document, element_id: &str, config: ApiConfig) -> Result<Rc<Dashboard>, JsValue> {
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", element_id)))?;

    let view = DashboardView::mount(document, &root)?;
    let api_base = config.base_url().to_string();
    let dashboard = Rc::new(Dashboard {
        view,
        state: RefCell::new(DashboardState::new()),
        api: TrainingApi::new(config),
        listeners: RefCell::new(Vec::new()),
        row_listeners: RefCell::new(Vec::new()),
        example_abort: RefCell::new(None),
        document_abort: RefCell::new(None),
    });

    let listeners = bind_events(&dashboard)?;
    *dashboard.listeners.borrow_mut() = listeners;

    spawn_local(dashboard.clone().load_stats());
    log::info!("training dashboard mounted on #{} ({})", element_id, api_base);
    Ok(dashboard)
}

/// Listener whose handler receives the dashboard, if it is still alive.
/// Form submissions are kept from navigating.
fn bind<F>(dashboard: &Rc<Dashboard>, target: &EventTarget, event: &'static str, mut handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(&Rc<Dashboard>) + 'static,
{
    let weak = Rc::downgrade(dashboard);
    Listener::new(target, event, move |e: Event| {
        if event == "submit" {
            e.prevent_default();
        }
        if let Some(dashboard) = weak.upgrade() {
            handler(&dashboard);
        }
    })
}

fn bind_events(dashboard: &Rc<Dashboard>) -> Result<Vec<Listener>, JsValue> {
    let v = &dashboard.view;
    let mut listeners = Vec::new();

    for (section, link) in &v.nav {
        let section = *section;
        listeners.push(bind(dashboard, link, "click", move |d| d.clone().show_section(section))?);
    }

    // Dashboard quick actions
    listeners.push(bind(dashboard, &v.quick_build_rag, "click", |d| spawn_local(d.clone().build_rag()))?);
    listeners.push(bind(dashboard, &v.quick_sample_data, "click", |d| {
        spawn_local(d.clone().create_sample_data())
    })?);
    listeners.push(bind(dashboard, &v.quick_add_example, "click", |d| d.view.example_dialog.modal.show())?);
    listeners.push(bind(dashboard, &v.quick_add_document, "click", |d| d.view.document_dialog.modal.show())?);

    // Listings
    listeners.push(bind(dashboard, &v.example_filter, "change", |d| spawn_local(d.clone().load_examples()))?);
    listeners.push(bind(dashboard, &v.add_example, "click", |d| d.view.example_dialog.modal.show())?);
    listeners.push(bind(dashboard, &v.document_filter, "change", |d| spawn_local(d.clone().load_documents()))?);
    listeners.push(bind(dashboard, &v.add_document, "click", |d| d.view.document_dialog.modal.show())?);

    // Dialogs
    let example = &v.example_dialog;
    listeners.push(bind(dashboard, &example.form, "submit", |d| spawn_local(d.clone().add_example()))?);
    for closer in [&example.cancel, &example.modal.close] {
        listeners.push(bind(dashboard, closer, "click", |d| d.view.example_dialog.modal.hide())?);
    }
    let doc_dialog = &v.document_dialog;
    listeners.push(bind(dashboard, &doc_dialog.form, "submit", |d| spawn_local(d.clone().add_document()))?);
    for closer in [&doc_dialog.cancel, &doc_dialog.modal.close] {
        listeners.push(bind(dashboard, closer, "click", |d| d.view.document_dialog.modal.hide())?);
    }
    for closer in [&v.viewer.done, &v.viewer.modal.close] {
        listeners.push(bind(dashboard, closer, "click", |d| d.view.viewer.modal.hide())?);
    }

    // RAG
    listeners.push(bind(dashboard, &v.rag_build, "click", |d| spawn_local(d.clone().build_rag()))?);
    listeners.push(bind(dashboard, &v.rag_test, "click", |d| spawn_local(d.clone().test_rag()))?);

    // Import
    listeners.push(bind(dashboard, &v.csv.form, "submit", |d| spawn_local(d.clone().import_csv()))?);
    listeners.push(bind(dashboard, &v.text.form, "submit", |d| spawn_local(d.clone().import_text()))?);
    listeners.push(bind(dashboard, &v.url.form, "submit", |d| spawn_local(d.clone().import_url()))?);

    // Export
    for (format, button) in &v.export_buttons {
        let format = *format;
        listeners.push(bind(dashboard, button, "click", move |d| d.export(format))?);
    }

    Ok(listeners)
}
