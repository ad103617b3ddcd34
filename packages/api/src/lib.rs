//! # API crate: HTTP client for the registration spreadsheet
//!
//! Registrations end up as rows in a spreadsheet behind a single webhook URL.
//! This crate is the only place that talks to it; the wizard only sees the
//! [`registration::Registrar`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Webhook URL from `PARTY_SHEETS_URL` (`.env` on native, compile-time value in the browser) |
//! | [`client`] | [`SheetsClient`]: duplicate lookup (GET) and submission (POST) over reqwest |
//! | [`response`] | Classification of webhook replies into outcomes and errors |

pub mod client;
pub mod config;
pub mod response;

pub use client::{ClientError, SheetsClient};
pub use config::{EndpointConfig, ENDPOINT_ENV};
pub use response::{interpret_submission, parse_duplicate_reply, DuplicateCheckError};
