//! # Registrar — the seam between the forms and the remote store
//!
//! The wizard and the payment screen never talk HTTP themselves. They go through
//! the [`Registrar`] trait, which has two operations:
//!
//! | Method | Contract |
//! |--------|----------|
//! | [`check_duplicate`](Registrar::check_duplicate) | Looks up prior submissions by email or phone. Infallible: implementations fail open and answer [`DuplicateCheckResult::none`] when the lookup breaks. |
//! | [`submit`](Registrar::submit) | Writes one [`SubmissionRecord`]. Reports how confident it is in the write through [`SubmitOutcome`], or a [`SubmissionError`] the caller can show to the user. Never retries. |
//!
//! Implementations: `api::SheetsClient` (the spreadsheet webhook) and
//! [`crate::MemoryRegistrar`] (in-memory, for tests).

use std::future::Future;

use crate::models::{DuplicateCheckResult, SubmissionRecord};

/// Async interface to wherever submissions are kept.
pub trait Registrar {
    fn check_duplicate(
        &self,
        email: &str,
        phone: &str,
    ) -> impl Future<Output = DuplicateCheckResult>;
    fn submit(
        &self,
        submission: &SubmissionRecord,
    ) -> impl Future<Output = Result<SubmitOutcome, SubmissionError>>;
}

/// What a successful [`Registrar::submit`] actually established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store explicitly acknowledged the write. `updated` is set when an
    /// existing row for the same person was replaced instead of appended.
    Confirmed { updated: bool },
    /// The store answered with a success status but no acknowledgement we can
    /// read, so persistence is assumed, not verified.
    Unverified,
    /// No store is configured; nothing was sent.
    Skipped,
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The store said no; the message is its own.
    #[error("{0}")]
    Rejected(String),
    #[error("Unreadable response from the server: {0}")]
    MalformedResponse(String),
    #[error("Could not confirm the submission was saved. Response: {0}")]
    Unrecognized(String),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Could not encode submission: {0}")]
    Encode(String),
}
