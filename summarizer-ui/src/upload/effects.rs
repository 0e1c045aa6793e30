use dioxus::prelude::{Signal, WritableExt};

use crate::upload::outcome::{UploadError, UploadOutcome};
use crate::upload::state::UploadViewModel;

/// Sends one file to the summarizer and yields the summary text.
#[allow(async_fn_in_trait)]
pub trait SummaryTransport {
    type File;

    async fn summarize(&self, file: Self::File) -> Result<String, UploadError>;
}

/// Mutable access to the view-model from inside an upload task.
pub trait UploadView {
    fn update<R>(&mut self, f: impl FnOnce(&mut UploadViewModel) -> R) -> R;
}

impl UploadView for Signal<UploadViewModel> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UploadViewModel) -> R) -> R {
        f(&mut self.write())
    }
}

/// Handle one activation of the summarize trigger.
///
/// Rejected submissions (`NoFileSelected`, `UploadInFlight`) return before
/// any request is made. Everything else settles into the view and yields
/// `Ok(())`, except a cancelled request which is reported as `Cancelled`.
pub async fn trigger_upload<V, T>(
    mut view: V,
    transport: &T,
    file: Option<T::File>,
) -> Result<(), UploadError>
where
    V: UploadView,
    T: SummaryTransport,
{
    let pending = view.update(|vm| vm.begin_upload(file))?;
    let ticket = pending.ticket;

    let result = transport.summarize(pending.file).await;

    match result {
        Err(UploadError::Cancelled) => {
            dioxus_logger::tracing::debug!("Summarize request cancelled");
            view.update(|vm| vm.cancel_upload(ticket));
            Err(UploadError::Cancelled)
        }
        result => {
            if let Err(UploadError::Transport(cause)) = &result {
                dioxus_logger::tracing::error!("Summarize request failed: {}", cause);
            }
            let outcome = UploadOutcome::from_result(result);
            if !view.update(|vm| vm.finish_upload(ticket, &outcome)) {
                dioxus_logger::tracing::warn!("Dropping stale summarize response");
            }
            Ok(())
        }
    }
}
