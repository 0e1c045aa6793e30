use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use summarizer_ui::{api_base, summarize_endpoint, UploadPanel};

const PAGE_TITLE: &str = "Resumidor de documentos";

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    dioxus_logger::tracing::info!("Summarizer backend: {}", api_base());
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }

        main {
            style: "min-height: 100vh; display: flex; flex-direction: column; gap: 1rem; background-color: #111827; color: white; padding: 2rem 1rem;",

            UploadPanel { endpoint: summarize_endpoint() }

            footer {
                style: "text-align: center; font-size: 0.75rem; color: #6b7280;",
                "PDF, XLSX, XML o CSV · servidor {api_base()}"
            }
        }
    }
}
