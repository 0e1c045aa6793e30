//! Browser-only checks; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use summarizer_ui::{
    build_upload_form, selected_file_names, UploadPanel, FILE_INPUT_ID, FILE_LABEL_ID, LOADING_ID,
    RESULT_ID, SUMMARIZE_BUTTON_ID,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, File, FormData, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn text_file(name: &str, body: &str) -> File {
    let parts = Array::of1(&body.into());
    File::new_with_str_sequence(&parts, name).expect("file")
}

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn classes(id: &str) -> Vec<String> {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} rendered"))
        .class_name()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[component]
fn PanelUnderTest() -> Element {
    rsx! {
        UploadPanel { endpoint: "http://127.0.0.1:9/summarize-file".to_string() }
    }
}

async fn mount_panel() {
    let document = document();
    let root = document.create_element("div").expect("root");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append root");

    dioxus_web::launch::launch_virtual_dom(
        VirtualDom::new(PanelUnderTest),
        dioxus_web::Config::new().rootelement(root),
    );
    TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
fn form_has_single_file_part() {
    let file = text_file("report.csv", "a,b\n1,2\n");
    let form: FormData = build_upload_form(&file).expect("form");

    let parts = form.get_all("file");
    assert_eq!(parts.length(), 1);

    let sent: File = parts.get(0).dyn_into().expect("file part");
    assert_eq!(sent.name(), "report.csv");
    assert_eq!(sent.size(), file.size());
}

#[wasm_bindgen_test]
fn missing_picker_reports_no_files() {
    assert!(selected_file_names("no-such-input").is_empty());
}

// One mount for the whole panel lifecycle: the DOM ids are page-global.
#[wasm_bindgen_test]
async fn panel_hides_controls_and_refuses_empty_submission() {
    mount_panel().await;

    assert!(classes(SUMMARIZE_BUTTON_ID).contains(&"hidden".to_string()));
    assert!(classes(LOADING_ID).contains(&"hidden".to_string()));
    assert!(classes(RESULT_ID).contains(&"hidden".to_string()));
    assert!(!classes(FILE_LABEL_ID).contains(&"hidden".to_string()));
    assert!(selected_file_names(FILE_INPUT_ID).is_empty());

    let window = web_sys::window().expect("window");
    let notices = Rc::new(RefCell::new(Vec::<String>::new()));
    let fetches = Rc::new(RefCell::new(0usize));

    let notices_sink = notices.clone();
    let alert = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
        notices_sink
            .borrow_mut()
            .push(message.as_string().unwrap_or_default());
    });
    let fetch_counter = fetches.clone();
    let fetch = Closure::<dyn FnMut(JsValue) -> JsValue>::new(move |_request: JsValue| {
        *fetch_counter.borrow_mut() += 1;
        JsValue::UNDEFINED
    });
    Reflect::set(&window, &"alert".into(), alert.as_ref()).expect("stub alert");
    Reflect::set(&window, &"fetch".into(), fetch.as_ref()).expect("stub fetch");

    let button: HtmlElement = document()
        .get_element_by_id(SUMMARIZE_BUTTON_ID)
        .expect("button")
        .dyn_into()
        .expect("html element");
    button.click();
    TimeoutFuture::new(50).await;

    assert_eq!(notices.borrow().as_slice(), ["Please select a file."]);
    assert_eq!(*fetches.borrow(), 0);
    assert!(classes(LOADING_ID).contains(&"hidden".to_string()));
    assert!(classes(RESULT_ID).contains(&"hidden".to_string()));

    alert.forget();
    fetch.forget();
}
