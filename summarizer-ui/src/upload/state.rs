use crate::upload::outcome::{UploadError, UploadOutcome};

pub const FILE_LABEL_MARKER: &str = "📂";
pub const DEFAULT_FILE_LABEL: &str = "Selecciona un archivo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

/// An accepted submission: the ticket to settle it with and the file to send.
#[derive(Debug)]
pub struct PendingUpload<F> {
    pub ticket: RequestTicket,
    pub file: F,
}

/// View-model behind the upload panel. One instance per mounted panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadViewModel {
    file_label: String,
    trigger_visible: bool,
    loading_visible: bool,
    result_visible: bool,
    result_text: String,
    pending: Option<RequestTicket>,
    next_ticket: u64,
}

impl Default for UploadViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadViewModel {
    pub fn new() -> Self {
        Self {
            file_label: DEFAULT_FILE_LABEL.to_string(),
            trigger_visible: false,
            loading_visible: false,
            result_visible: false,
            result_text: String::new(),
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn trigger_visible(&self) -> bool {
        self.trigger_visible
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Reflect a picker change. Only the first file counts; an empty list is a no-op.
    pub fn select_file<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let Some(name) = names.first() else {
            return false;
        };

        self.file_label = format!("{FILE_LABEL_MARKER} {}", name.as_ref());
        self.trigger_visible = true;
        true
    }

    /// Accept a submission for `file`, switching the panel to its loading state.
    pub fn begin_upload<F>(&mut self, file: Option<F>) -> Result<PendingUpload<F>, UploadError> {
        let Some(file) = file else {
            return Err(UploadError::NoFileSelected);
        };
        if self.pending.is_some() {
            return Err(UploadError::UploadInFlight);
        }

        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);

        self.loading_visible = true;
        self.result_visible = false;

        Ok(PendingUpload { ticket, file })
    }

    /// Settle the pending request. Returns false for a stale ticket, which leaves the view untouched.
    pub fn finish_upload(&mut self, ticket: RequestTicket, outcome: &UploadOutcome) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;

        // Loading goes away before the result shows up.
        self.loading_visible = false;
        self.result_text = outcome.display_text();
        self.result_visible = true;
        true
    }

    /// Drop the pending request without rendering anything.
    pub fn cancel_upload(&mut self, ticket: RequestTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.loading_visible = false;
        true
    }
}
