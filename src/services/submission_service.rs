use crate::domain::contact::{ContactMessage, NewSubmission};
use crate::error::{AppError, Result};
use crate::storage::ContactStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use time::OffsetDateTime;

/// Performs one best-effort write of a contact message to the injected store.
///
/// At most one submission is in flight at a time: the busy flag is taken on
/// entry and released when the write settles, on either branch. A second call
/// while busy is rejected without touching the store.
#[derive(Clone, Debug)]
pub struct SubmissionService {
    store: Arc<dyn ContactStore>,
    busy: Arc<AtomicBool>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store, busy: Arc::new(AtomicBool::new(false)) }
    }

    /// Whether a submission is currently in flight. Read by the presentation
    /// layer to gate its inputs.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submits one contact message.
    ///
    /// The timestamp is assigned here, at submission time. Store failures of
    /// any kind collapse into the single `SubmissionFailed` outcome; the
    /// underlying cause is logged for operators only.
    ///
    /// # Errors
    /// Returns `AppError::Busy` if another submission is in flight.
    /// Returns `AppError::SubmissionFailed` if the store append fails.
    #[tracing::instrument(err(level = "warn"), skip(self, submission))]
    pub async fn submit(&self, submission: NewSubmission) -> Result<()> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(AppError::Busy)?;

        let message = ContactMessage::new(submission, OffsetDateTime::now_utc());

        match self.store.append(&message).await {
            Ok(()) => {
                tracing::info!(submitted_at = %message.submitted_at_rfc3339(), "Contact message stored");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to store contact message");
                Err(AppError::SubmissionFailed)
            }
        }
    }
}

/// Clears the busy flag when dropped, so the service returns to idle on both
/// the success and failure paths.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
