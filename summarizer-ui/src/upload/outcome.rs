use shared_types::SummarizeFileResponse;

/// Prefix of every error line rendered into the result panel.
pub const ERROR_PREFIX: &str = "❌ Error: ";
/// Shown when the server answered without a summary or an error message.
pub const DEFAULT_SUMMARY_ERROR: &str = "No se pudo generar el resumen.";
/// Shown for every transport-level failure.
pub const CONNECTION_ERROR: &str = "No se pudo conectar al servidor.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select a file.")]
    NoFileSelected,

    #[error("{0}")]
    ServerReported(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("an upload is already in progress")]
    UploadInFlight,

    #[error("upload cancelled")]
    Cancelled,
}

impl UploadError {
    /// Text safe to render for the user. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::ServerReported(message) => message.clone(),
            UploadError::Transport(_) => CONNECTION_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

/// What ends up in the result panel once a request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Summary(String),
    Error(String),
}

impl UploadOutcome {
    pub fn from_result(result: Result<String, UploadError>) -> Self {
        match result {
            Ok(summary) => UploadOutcome::Summary(summary),
            Err(e) => UploadOutcome::Error(e.user_message()),
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            UploadOutcome::Summary(text) => text.clone(),
            UploadOutcome::Error(message) => format!("{ERROR_PREFIX}{message}"),
        }
    }
}

/// Decide between summary and server-reported error for a decoded body.
pub fn interpret_response(response: SummarizeFileResponse) -> Result<String, UploadError> {
    if let Some(summary) = response.non_empty_summary() {
        return Ok(summary.to_string());
    }

    let message = response
        .non_empty_error()
        .unwrap_or(DEFAULT_SUMMARY_ERROR)
        .to_string();
    Err(UploadError::ServerReported(message))
}
