//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const REGISTRATION_CSS: Asset = asset!("/assets/registration.css");

mod session;
pub use session::{use_event_config, use_registrar, use_session, SessionProvider};

mod form_field;
pub use form_field::FormField;

mod back_button;
pub use back_button::BackButton;

mod summary;
pub use summary::RegistrantSummary;

mod confetti;
pub use confetti::{confetti_pieces, Confetti, ConfettiPiece, CONFETTI_DURATION};

mod wizard;
pub use wizard::RegistrationWizard;
