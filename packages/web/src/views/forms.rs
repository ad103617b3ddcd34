//! The two registration forms. Both run the same wizard; they differ in
//! category, copy and where they go when finished.

use dioxus::prelude::*;
use registration::{Category, SubmissionMode};
use ui::RegistrationWizard;

use crate::Route;

/// Party registration. Payment follows, so finishing leads to the account page.
#[component]
pub fn Join() -> Element {
    let nav = use_navigator();

    rsx! {
        RegistrationWizard {
            category: Category::Join,
            title: "Party registration".to_string(),
            description: "Fill in your details and come party with us!".to_string(),
            finish_label: "Continue to payment".to_string(),
            on_complete: move |mode: SubmissionMode| {
                tracing::debug!(?mode, "join form finished");
                nav.push(Route::Account {});
            },
            on_exit: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

/// Notify-me signup. Submitted as soon as the form is finished.
#[component]
pub fn Interest() -> Element {
    let nav = use_navigator();

    rsx! {
        RegistrationWizard {
            category: Category::Interest,
            title: "Party notification".to_string(),
            description: "Leave your details and we'll tell you when the next party is on.".to_string(),
            finish_label: "Notify me".to_string(),
            on_complete: move |_| {
                nav.push(Route::InterestSuccess {});
            },
            on_exit: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
