use gloo_net::http::Request;
use shared_types::{SummarizeFileResponse, SUMMARIZE_FILE_ROUTE};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;
use web_sys::{AbortController, File};

use crate::interop::build_upload_form;
use crate::upload::effects::SummaryTransport;
use crate::upload::outcome::{interpret_response, UploadError};

/// Summarizer backend used when no override was baked in at build time
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Resolve the API base URL
/// - `SUMMARIZER_API_BASE` at compile time wins (a WASM bundle has no runtime env)
/// - otherwise the local development server
fn resolve_api_base(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE
        .get_or_init(|| resolve_api_base(option_env!("SUMMARIZER_API_BASE")))
        .as_str()
}

pub fn summarize_endpoint() -> String {
    format!("{}{}", api_base(), SUMMARIZE_FILE_ROUTE)
}

/// POST `file` to the summarize endpoint as multipart form data.
///
/// The body is decoded whatever the status code: the backend reports
/// failures as `{"error": ...}` with 4xx/5xx.
pub async fn summarize_file(
    url: &str,
    file: &File,
    abort: Option<&AbortController>,
) -> Result<String, UploadError> {
    let form = build_upload_form(file)
        .map_err(|e| UploadError::Transport(format!("failed to build form data: {e:?}")))?;

    let signal = abort.map(|controller| controller.signal());
    let request = Request::post(url)
        .abort_signal(signal.as_ref())
        .body(form)
        .map_err(|e| UploadError::Transport(format!("request encode failed: {e}")))?;

    let response = request.send().await.map_err(|e| {
        if signal.as_ref().is_some_and(|s| s.aborted()) {
            UploadError::Cancelled
        } else {
            UploadError::Transport(format!("request failed: {e}"))
        }
    })?;

    if !response.ok() {
        dioxus_logger::tracing::warn!("Summarize endpoint answered HTTP {}", response.status());
    }

    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Transport(format!("failed to read body: {e}")))?;

    decode_summarize_body(&body)
}

/// Turn a raw response body into the summary or the reason there is none.
///
/// An unparseable body, or a bare `null` with no fields to read, is a
/// transport failure. Any other JSON goes through the summary / error /
/// default branch.
pub fn decode_summarize_body(body: &str) -> Result<String, UploadError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| UploadError::Transport(format!("failed to parse JSON: {e}")))?;
    if value.is_null() {
        return Err(UploadError::Transport("response body is null".to_string()));
    }

    interpret_response(SummarizeFileResponse::from_json_value(&value))
}

/// Browser fetch transport. Clones share the in-flight abort handle.
#[derive(Clone)]
pub struct BrowserTransport {
    url: String,
    in_flight: Rc<RefCell<Option<AbortController>>>,
}

impl BrowserTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    /// Abort the outstanding request, if any.
    pub fn abort_in_flight(&self) {
        if let Some(controller) = self.in_flight.borrow_mut().take() {
            controller.abort();
        }
    }
}

impl SummaryTransport for BrowserTransport {
    type File = File;

    async fn summarize(&self, file: File) -> Result<String, UploadError> {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable, request is not cancellable: {:?}", e);
                None
            }
        };
        *self.in_flight.borrow_mut() = controller.clone();

        dioxus_logger::tracing::info!("Uploading {} to {}", file.name(), self.url);
        let result = summarize_file(&self.url, &file, controller.as_ref()).await;

        self.in_flight.borrow_mut().take();
        result
    }
}
