//! Payment confirmation for `join` registrations.
//!
//! A `join` record is only held in the [`Session`] when the wizard finishes.
//! It is submitted once the registrant confirms the bank transfer.

use crate::models::{Category, SubmissionRecord};
use crate::registrar::{Registrar, SubmissionError, SubmitOutcome};
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Please confirm that you have completed the transfer")]
    NotConfirmed,
    #[error("There is no registration waiting for payment")]
    NothingPending,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Submit the pending `join` registration with `accountConfirmed = true`.
///
/// On failure the session is left untouched so the user can try again.
pub async fn confirm_payment<R: Registrar>(
    registrar: &R,
    session: &mut Session,
    transfer_confirmed: bool,
) -> Result<SubmitOutcome, PaymentError> {
    if !transfer_confirmed {
        return Err(PaymentError::NotConfirmed);
    }
    let pending = session.pending_payment().ok_or(PaymentError::NothingPending)?;
    let submission = SubmissionRecord::new(pending.record.clone(), Category::Join, Some(true));

    let outcome = registrar.submit(&submission).await.map_err(|e| {
        tracing::error!(error = %e, "payment confirmation submission failed");
        e
    })?;

    tracing::info!(?outcome, "payment confirmed");
    session.mark_submitted(outcome);
    Ok(outcome)
}
