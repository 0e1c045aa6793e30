//! Wire types for the document summarizer endpoint
//!
//! These types describe the contract of `POST /summarize-file`:
//! - the Dioxus upload widget (WASM) decodes responses with them
//! - any backend implementing the route encodes responses with them
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Route
// ============================================================================

/// Path of the summarize endpoint, relative to the API base URL
pub const SUMMARIZE_FILE_ROUTE: &str = "/summarize-file";

/// Name of the single multipart part carrying the uploaded file
pub const SUMMARIZE_FILE_FIELD: &str = "file";

// ============================================================================
// Response
// ============================================================================

/// Body returned by `POST /summarize-file`
///
/// A successful call carries `summary`; a failed one carries `error`.
/// The same shape is used for 2xx, 4xx and 5xx answers, so clients decode
/// it without looking at the status code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../summarizer-ui/src/types/generated.ts")]
pub struct SummarizeFileResponse {
    /// Generated summary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub summary: Option<String>,

    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl SummarizeFileResponse {
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            summary: Some(text.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            summary: None,
            error: Some(message.into()),
        }
    }

    /// Pick `summary` and `error` out of any decoded JSON body.
    ///
    /// Only string fields of a JSON object count; arrays, scalars and
    /// mistyped fields read as absent.
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        let string_field = |name: &str| {
            value
                .as_object()
                .and_then(|object| object.get(name))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };

        Self {
            summary: string_field("summary"),
            error: string_field("error"),
        }
    }

    /// The summary, if present and non-empty
    pub fn non_empty_summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// The error message, if present and non-empty
    pub fn non_empty_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|s| !s.is_empty())
    }
}
