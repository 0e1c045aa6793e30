use dioxus::prelude::*;

pub mod effects;
pub mod outcome;
pub mod state;
pub mod styles;

pub use effects::{trigger_upload, SummaryTransport, UploadView};
pub use outcome::{UploadError, UploadOutcome};
pub use state::UploadViewModel;

use crate::api::BrowserTransport;
use crate::interop::{first_selected_file, selected_file_names, show_blocking_notice};
use styles::UPLOAD_STYLES;

// DOM contract of the panel
pub const FILE_INPUT_ID: &str = "file-input";
pub const SUMMARIZE_BUTTON_ID: &str = "summarize-button";
pub const LOADING_ID: &str = "loading";
pub const RESULT_ID: &str = "result";
pub const RESULT_TEXT_ID: &str = "result-text";
pub const FILE_LABEL_ID: &str = "file-label";

pub const HIDDEN_CLASS: &str = "hidden";

pub fn visibility_class(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{base} {HIDDEN_CLASS}")
    }
}

#[component]
pub fn UploadPanel(endpoint: String) -> Element {
    let mut view = use_signal(UploadViewModel::new);
    let transport = use_hook(|| BrowserTransport::new(endpoint.clone()));

    let transport_on_drop = transport.clone();
    use_drop(move || transport_on_drop.abort_in_flight());

    let onchange = move |_: FormEvent| {
        let names = selected_file_names(FILE_INPUT_ID);
        if view.write().select_file(&names) {
            dioxus_logger::tracing::debug!("File selected: {}", view.read().file_label());
        }
    };

    let onclick = move |_: MouseEvent| {
        let Some(file) = first_selected_file(FILE_INPUT_ID) else {
            show_blocking_notice(&UploadError::NoFileSelected.to_string());
            return;
        };

        let transport = transport.clone();
        spawn(async move {
            match trigger_upload(view, &transport, Some(file)).await {
                Ok(()) | Err(UploadError::Cancelled) => {}
                Err(e) => dioxus_logger::tracing::warn!("Upload not started: {}", e),
            }
        });
    };

    let vm = view();

    rsx! {
        style { {UPLOAD_STYLES} }

        div {
            class: "upload-container",

            h1 { class: "upload-title", "Resumidor de documentos" }

            input {
                id: FILE_INPUT_ID,
                class: "file-input",
                r#type: "file",
                onchange: onchange,
            }

            label {
                id: FILE_LABEL_ID,
                class: "file-label",
                r#for: FILE_INPUT_ID,
                "{vm.file_label()}"
            }

            button {
                id: SUMMARIZE_BUTTON_ID,
                class: visibility_class("summarize-button", vm.trigger_visible()),
                disabled: vm.is_busy(),
                onclick: onclick,
                "Resumir"
            }

            div {
                id: LOADING_ID,
                class: visibility_class("loading", vm.loading_visible()),
                "⏳ Generando resumen..."
            }

            div {
                id: RESULT_ID,
                class: visibility_class("result", vm.result_visible()),
                p {
                    id: RESULT_TEXT_ID,
                    class: "result-text",
                    "{vm.result_text()}"
                }
            }
        }
    }
}
