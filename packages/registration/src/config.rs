//! # Event configuration — `event.toml`
//!
//! Describes the party itself, the notices on the landing page and the bank
//! account shown on the payment screen. The web shell embeds the file at
//! build time and parses it on start.
//!
//! ## Structure
//!
//! ```toml
//! [event]
//! title = "CHA CHA CHA"
//! tagline = "A summer night party"
//! venue = "The Box Jamsil-saenae"
//! address = "32-10, Baekjegobun-ro 7-gil, Songpa-gu, Seoul"
//! schedule = "2026.01.30 (FRI) 8PM - LATE"
//! lineup = ["DEMIC", "UON"]
//! inquiry_url = "https://open.kakao.com/"
//!
//! [[notice]]
//! heading = "Entry fee"
//! lines = ["30,000 won per person"]
//!
//! [payment]
//! bank = "KB Kookmin Bank"
//! account_number = "123-456-789012"
//! depositor_note = "Please transfer under the name you registered with"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`EventConfig`] | Top-level config with TOML (de)serialisation. |
//! | [`EventDetails`] | Title, venue, schedule, lineup and inquiry link for the landing page. |
//! | [`NoticeEntry`] | One headed block of the landing page notice. |
//! | [`PaymentConfig`] | Bank, account number and the depositor note. |
//!
//! Every field has a default, so a missing or partial file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub event: EventDetails,
    #[serde(default = "default_notice")]
    pub notice: Vec<NoticeEntry>,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_venue")]
    pub venue: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_schedule")]
    pub schedule: String,
    #[serde(default = "default_lineup")]
    pub lineup: Vec<String>,
    /// Where "1:1 inquiry" leads. Empty hides the link.
    #[serde(default = "default_inquiry_url")]
    pub inquiry_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeEntry {
    pub heading: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    #[serde(default = "default_bank")]
    pub bank: String,
    #[serde(default = "default_account_number")]
    pub account_number: String,
    #[serde(default = "default_depositor_note")]
    pub depositor_note: String,
}

fn default_title() -> String {
    "CHA CHA CHA".to_string()
}

fn default_tagline() -> String {
    "Join us for a night of music, drinks and new friends".to_string()
}

fn default_venue() -> String {
    "The Box Jamsil-saenae".to_string()
}

fn default_address() -> String {
    "32-10, Baekjegobun-ro 7-gil, Songpa-gu, Seoul".to_string()
}

fn default_schedule() -> String {
    "2026.01.30 (FRI) 8PM - LATE".to_string()
}

fn default_lineup() -> Vec<String> {
    ["DEMIC", "DONGTAE", "DZNS", "SAEHUN", "UON"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_inquiry_url() -> String {
    "https://open.kakao.com/".to_string()
}

fn notice(heading: &str, lines: &[&str]) -> NoticeEntry {
    NoticeEntry {
        heading: heading.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn default_notice() -> Vec<NoticeEntry> {
    vec![
        notice(
            "Entry fee",
            &[
                "30,000 won per person",
                "Beer, tequila and nachos are on the house",
                "Feel free to bring your own food and drinks",
            ],
        ),
        notice(
            "Entry",
            &[
                "Doors open at 8 PM",
                "You get a wristband once your payment is checked",
                "Show the wristband to come back in",
            ],
        ),
        notice(
            "Other inquiries",
            &["Refunds and other questions go through the 1:1 inquiry chat"],
        ),
    ]
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event: EventDetails::default(),
            notice: default_notice(),
            payment: PaymentConfig::default(),
        }
    }
}

fn default_bank() -> String {
    "KB Kookmin Bank".to_string()
}

fn default_account_number() -> String {
    "123-456-789012".to_string()
}

fn default_depositor_note() -> String {
    "Please transfer under the name you registered with".to_string()
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            venue: default_venue(),
            address: default_address(),
            schedule: default_schedule(),
            lineup: default_lineup(),
            inquiry_url: default_inquiry_url(),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            bank: default_bank(),
            account_number: default_account_number(),
            depositor_note: default_depositor_note(),
        }
    }
}

impl PaymentConfig {
    /// Bank and account number as shown and copied: `"KB Kookmin Bank 123-456-789012"`.
    pub fn display_account(&self) -> String {
        format!("{} {}", self.bank, self.account_number)
    }
}

impl EventConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "event.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
