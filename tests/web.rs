//! Browser tests for the widget and dashboard DOM.
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use chatbot_frontend::components::training_dashboard::{self, Dashboard};
use chatbot_frontend::constants::WELCOME_MESSAGE;
use chatbot_frontend::dom_utils;
use chatbot_frontend::models::Stats;
use chatbot_frontend::network::ApiConfig;
use chatbot_frontend::toast::{self, Notice};
use chatbot_frontend::{ChatbotWidget, WidgetOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, KeyboardEvent, KeyboardEventInit, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn widget_root() -> Element {
    document().query_selector(".chatbot-widget").unwrap().expect("widget not mounted")
}

fn transcript(root: &Element) -> Vec<String> {
    let nodes = root.query_selector_all(".chatbot-message .message-content").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.text_content())
        .collect()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn widget_builds_closed_panel_with_welcome_message() {
    let options = WidgetOptions {
        title: "Support".into(),
        placeholder: "Ask us".into(),
        ..WidgetOptions::default()
    };
    let widget = ChatbotWidget::with_options(options).expect("widget mounts");
    let root = widget_root();

    assert!(root.class_list().contains("bottom-right"));
    assert!(root.class_list().contains("light"));
    let title = root.query_selector(".chatbot-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Support"));
    let input = root.query_selector(".chatbot-input").unwrap().unwrap();
    assert_eq!(input.get_attribute("placeholder").as_deref(), Some("Ask us"));

    let container = root.query_selector(".chatbot-container").unwrap().unwrap();
    assert!(container.class_list().contains("hidden"));
    assert_eq!(transcript(&root), vec![WELCOME_MESSAGE.to_string()]);
    assert!(document().get_element_by_id("chatbot-widget-styles").is_some());

    widget.destroy();
}

#[wasm_bindgen_test]
fn toggle_button_opens_and_close_button_hides() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    let root = widget_root();
    let container = root.query_selector(".chatbot-container").unwrap().unwrap();

    click(&root.query_selector(".chatbot-toggle").unwrap().unwrap());
    assert!(widget.is_open());
    assert!(!container.class_list().contains("hidden"));

    click(&root.query_selector(".chatbot-close").unwrap().unwrap());
    assert!(!widget.is_open());
    assert!(container.class_list().contains("hidden"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn title_markup_is_rendered_as_text() {
    let options = WidgetOptions { title: "<b>bold</b>".into(), ..WidgetOptions::default() };
    let widget = ChatbotWidget::with_options(options).unwrap();
    let root = widget_root();

    let title = root.query_selector(".chatbot-title").unwrap().unwrap();
    assert!(title.query_selector("b").unwrap().is_none());
    assert_eq!(title.text_content().as_deref(), Some("<b>bold</b>"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn blank_send_leaves_transcript_alone() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    let root = widget_root();

    widget.send_message();
    assert_eq!(transcript(&root).len(), 1);
    assert!(root.query_selector(".chatbot-typing").unwrap().is_none());

    widget.destroy();
}

#[wasm_bindgen_test]
fn clear_conversation_resets_transcript_and_token() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    let root = widget_root();
    let before = widget.conversation_id();

    widget.clear_conversation();
    assert_ne!(widget.conversation_id(), before);
    assert_eq!(transcript(&root), vec![WELCOME_MESSAGE.to_string()]);

    widget.destroy();
}

#[wasm_bindgen_test]
fn enter_in_input_sends_message() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    let root = widget_root();
    let input = root.query_selector(".chatbot-input").unwrap().unwrap();
    dom_utils::set_field_value(&input, "hello");

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();

    assert_eq!(transcript(&root), vec![WELCOME_MESSAGE.to_string(), "hello".to_string()]);
    assert_eq!(dom_utils::field_value(&input), "");
    assert!(root.query_selector(".chatbot-typing").unwrap().is_some());

    widget.destroy();
}

#[wasm_bindgen_test]
fn other_keys_do_not_send() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    let root = widget_root();
    let input = root.query_selector(".chatbot-input").unwrap().unwrap();
    dom_utils::set_field_value(&input, "hello");

    let init = KeyboardEventInit::new();
    init.set_key("a");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();

    assert_eq!(transcript(&root).len(), 1);
    widget.destroy();
}

#[wasm_bindgen_test]
fn destroy_removes_widget() {
    let widget = ChatbotWidget::with_options(WidgetOptions::default()).unwrap();
    widget.destroy();
    assert!(document().query_selector(".chatbot-widget").unwrap().is_none());
}

fn dashboard_host(id: &str) -> Element {
    let doc = document();
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let host = doc.create_element("div").unwrap();
    host.set_id(id);
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

fn mount_dashboard(id: &str) -> (Element, Rc<Dashboard>) {
    let host = dashboard_host(id);
    let dashboard = training_dashboard::mount(&document(), id, ApiConfig::from_url("/no-backend")).unwrap();
    (host, dashboard)
}

fn by_id(host: &Element, id: &str) -> Element {
    host.query_selector(&format!("#{}-{}", host.id(), id)).unwrap().expect(id)
}

fn active_section(host: &Element) -> Option<String> {
    host.query_selector(".content-section.active").unwrap()?.get_attribute("data-section")
}

fn option_labels(select: &Element) -> Vec<String> {
    let nodes = select.query_selector_all("option").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.text_content())
        .collect()
}

fn stats(examples: &str, documents: &str) -> Stats {
    serde_json::from_str(&format!(
        r#"{{"total_examples":1,"total_documents":2,"example_categories":{},"document_categories":{}}}"#,
        examples, documents
    ))
    .unwrap()
}

#[wasm_bindgen_test]
fn dashboard_builds_sections_and_starts_on_overview() {
    let (host, _dashboard) = mount_dashboard("dashboard-under-test");

    assert_eq!(host.query_selector_all(".content-section").unwrap().length(), 6);
    assert_eq!(host.query_selector_all(".nav-link").unwrap().length(), 6);
    assert_eq!(active_section(&host).as_deref(), Some("dashboard"));

    by_id(&host, "exampleCategoryFilter");
    assert!(by_id(&host, "addExampleModal").class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn nav_link_switches_active_section() {
    let (host, _dashboard) = mount_dashboard("dashboard-nav-test");

    let link = host.query_selector(".nav-link[data-section='import']").unwrap().unwrap();
    click(&link);

    assert!(link.class_list().contains("active"));
    assert_eq!(active_section(&host).as_deref(), Some("import"));
}

#[wasm_bindgen_test]
fn add_example_button_opens_dialog() {
    let (host, _dashboard) = mount_dashboard("dashboard-dialog-test");

    let modal = by_id(&host, "addExampleModal");
    let open = host
        .query_selector("section[data-section='examples'] .toolbar button")
        .unwrap()
        .expect("add example button");
    click(&open);
    assert!(!modal.class_list().contains("hidden"));

    click(&modal.query_selector(".modal-close").unwrap().unwrap());
    assert!(modal.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn stats_fill_every_category_filter_once() {
    let (host, dashboard) = mount_dashboard("dashboard-filter-test");
    dashboard.apply_stats(stats(r#"{"a":1,"shared":2}"#, r#"{"b":2,"shared":1}"#));

    let expected = vec!["All Categories", "a", "b", "shared"];
    for id in ["exampleCategoryFilter", "documentCategoryFilter", "exportCategory"] {
        assert_eq!(option_labels(&by_id(&host, id)), expected, "{}", id);
    }
}

#[wasm_bindgen_test]
fn filter_keeps_selection_while_category_exists() {
    let (host, dashboard) = mount_dashboard("dashboard-selection-test");
    let export = by_id(&host, "exportCategory");

    dashboard.apply_stats(stats(r#"{"a":1}"#, r#"{"b":2}"#));
    dom_utils::set_field_value(&export, "b");

    dashboard.apply_stats(stats(r#"{"a":3}"#, r#"{"b":4}"#));
    assert_eq!(dom_utils::field_value(&export), "b");

    dashboard.apply_stats(stats(r#"{"a":3}"#, "{}"));
    assert_eq!(dom_utils::field_value(&export), "");
}

#[wasm_bindgen_test]
fn csv_column_defaults_survive_reset() {
    let (host, _dashboard) = mount_dashboard("dashboard-csv-test");
    let column = by_id(&host, "inputColumn");
    dom_utils::set_field_value(&column, "question");

    let form: HtmlFormElement = column.closest("form").unwrap().unwrap().dyn_into().unwrap();
    form.reset();
    assert_eq!(dom_utils::field_value(&column), "input");
}

#[wasm_bindgen_test]
fn two_dashboards_keep_their_dialogs_apart() {
    let (_a, _first) = mount_dashboard("dashboard-a");
    let (b, _second) = mount_dashboard("dashboard-b");

    let save: HtmlButtonElement = by_id(&b, "addExampleModal")
        .query_selector("button[type='submit']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let form = save.form().expect("save button is bound to a form");
    let node: &Node = &form;
    assert!(b.contains(Some(node)));

    let label = b.query_selector("label[for='dashboard-b-exampleCategory']").unwrap();
    assert!(label.is_some());
}

#[wasm_bindgen_test]
fn new_notice_replaces_previous_one() {
    let host = dashboard_host("notice-host");
    toast::show(&host, &Notice::info("first"));
    toast::show(&host, &Notice::error("second"));

    let toasts = host.query_selector_all(".toast").unwrap();
    assert_eq!(toasts.length(), 1);
    let only = host.query_selector(".toast").unwrap().unwrap();
    assert!(only.class_list().contains("toast-error"));
    let text = only.query_selector(".toast-text").unwrap().unwrap();
    assert_eq!(text.text_content().as_deref(), Some("second"));
}
