//! The latest registration of the current browser session.
//!
//! Owned by the app shell and handed to screens through context, so the payment
//! and success screens can show what was just entered. Nothing here outlives a
//! page reload.

use crate::models::{Category, UserRecord};
use crate::registrar::SubmitOutcome;

/// A finalized record and where it stands.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub record: UserRecord,
    pub category: Category,
    /// `None` until the record has been handed to the remote store.
    pub outcome: Option<SubmitOutcome>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    latest: Option<Registration>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest registration with a freshly finalized record.
    pub fn store(&mut self, record: UserRecord, category: Category) {
        self.latest = Some(Registration {
            record,
            category,
            outcome: None,
        });
    }

    pub fn latest(&self) -> Option<&Registration> {
        self.latest.as_ref()
    }

    pub fn record(&self) -> Option<&UserRecord> {
        self.latest.as_ref().map(|r| &r.record)
    }

    /// A `join` registration still waiting for its payment confirmation.
    pub fn pending_payment(&self) -> Option<&Registration> {
        self.latest
            .as_ref()
            .filter(|r| r.category == Category::Join && r.outcome.is_none())
    }

    /// Record the outcome of submitting the latest registration.
    /// Does nothing when the session is empty.
    pub fn mark_submitted(&mut self, outcome: SubmitOutcome) {
        if let Some(latest) = self.latest.as_mut() {
            latest.outcome = Some(outcome);
        }
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}
