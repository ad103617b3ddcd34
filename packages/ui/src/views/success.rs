use dioxus::prelude::*;
use registration::{Category, SubmitOutcome};

use crate::session::use_session;
use crate::{Confetti, RegistrantSummary};

#[component]
pub fn SuccessView(category: Category, on_home: EventHandler<()>) -> Element {
    let mut session = use_session();
    let latest = session.read().latest().cloned();

    let (heading, message) = match category {
        Category::Join => (
            "You're in!",
            "Your party registration is complete. See you on the dance floor.",
        ),
        Category::Interest => (
            "You're on the list!",
            "We'll let you know a few days before the next party.",
        ),
    };
    let unverified = latest
        .as_ref()
        .is_some_and(|r| r.outcome == Some(SubmitOutcome::Unverified));

    rsx! {
        div {
            class: "success",
            Confetti {}

            h1 { class: "success__title", "{heading}" }
            p { class: "success__message", "{message}" }

            if let Some(registration) = latest {
                RegistrantSummary { record: registration.record }
            }

            if unverified {
                p {
                    class: "success__caveat",
                    "We could not confirm that your details were saved. If you don't hear from us, please get in touch."
                }
            }

            button {
                class: "button button--primary",
                r#type: "button",
                onclick: move |_| {
                    session.write().clear();
                    on_home.call(());
                },
                "Back to home"
            }
        }
    }
}
