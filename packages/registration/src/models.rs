//! # Domain models for party registrations
//!
//! Defines the records collected by the registration forms and the payloads
//! exchanged with the spreadsheet webhook. Everything here is
//! `Serialize + Deserialize` so the same types are used on the wire and in the UI.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Category`] | Whether a signup is a full registration (`"join"`) or a notify-me signup (`"interest"`). |
//! | [`UserRecord`] | The three fields a registrant fills in: name, phone and email. Starts empty and is filled one step at a time. |
//! | [`DuplicateCheckResult`] | Reply of the duplicate lookup: whether someone with the same email or phone already signed up, under which category, and their name. |
//! | [`SubmissionRecord`] | The row written to the remote store: a [`UserRecord`] plus timestamp, category and the optional payment confirmation flag. |

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Kind of signup a form produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Full registration; a payment step follows.
    Join,
    /// Notify-me signup; nothing follows.
    Interest,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Join => "join",
            Category::Interest => "interest",
        }
    }

    /// Human-friendly label used in messages shown to the registrant.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Join => "party registration",
            Category::Interest => "party notification",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details entered by the registrant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Formatted as `010-XXXX-XXXX` once valid.
    pub phone: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether another record refers to the same person (same email or same phone).
    pub fn matches(&self, other: &UserRecord) -> bool {
        self.email == other.email || self.phone == other.phone
    }
}

/// Outcome of a duplicate lookup against prior submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheckResult {
    #[serde(default)]
    pub exists: bool,
    #[serde(default, rename = "type")]
    pub category: Option<Category>,
    #[serde(default)]
    pub name: Option<String>,
}

impl DuplicateCheckResult {
    /// "No duplicate". Also the fail-open value when the lookup itself fails.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn found(category: Category, name: impl Into<String>) -> Self {
        Self {
            exists: true,
            category: Some(category),
            name: Some(name.into()),
        }
    }
}

/// A row sent to the remote store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub user: UserRecord,
    /// ISO-8601 UTC timestamp, e.g. `2026-10-18T09:30:00.000Z`.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(
        rename = "accountConfirmed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_confirmed: Option<bool>,
}

impl SubmissionRecord {
    /// Stamp a record with the current time.
    pub fn new(user: UserRecord, category: Category, account_confirmed: Option<bool>) -> Self {
        Self {
            user,
            timestamp: current_timestamp(),
            category,
            account_confirmed,
        }
    }
}

fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
