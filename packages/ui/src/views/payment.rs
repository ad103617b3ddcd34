use dioxus::prelude::*;
use registration::confirm_payment;

use crate::icons::{FaCheck, FaCopy};
use crate::session::{use_event_config, use_registrar, use_session};
use crate::{BackButton, Icon, RegistrantSummary};

/// Copy `text` with the browser clipboard API.
async fn copy_to_clipboard(text: String) {
    let literal = serde_json::to_string(&text).unwrap_or_default();
    let js = format!("await navigator.clipboard.writeText({literal}); return true;");
    if let Err(e) = document::eval(&js).await {
        tracing::warn!("Failed to copy to clipboard: {:?}", e);
    }
}

/// Bank transfer details for a `join` registration, and the button that
/// submits it once the transfer is done.
#[component]
pub fn PaymentView(on_back: EventHandler<()>, on_paid: EventHandler<()>) -> Element {
    let mut session = use_session();
    let registrar = use_registrar();
    let config = use_event_config();
    let mut confirmed = use_signal(|| false);
    let mut copied = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let Some(pending) = session.read().pending_payment().cloned() else {
        return rsx! {
            div {
                class: "payment",
                BackButton { label: "Home".to_string(), onclick: move |_| on_back.call(()) }
                p { class: "payment__empty", "There is no registration waiting for payment." }
            }
        };
    };

    let payment = config.read().payment.clone();
    let account = payment.display_account();

    let handle_copy = {
        let account = account.clone();
        move |_| {
            let account = account.clone();
            spawn(async move {
                copy_to_clipboard(account).await;
                copied.set(true);
            });
        }
    };

    let handle_submit = move |_| {
        if loading() {
            return;
        }
        let registrar = registrar.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let mut current = session.peek().clone();
            match confirm_payment(&registrar, &mut current, confirmed()).await {
                Ok(_) => {
                    session.set(current);
                    loading.set(false);
                    on_paid.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "payment",
            BackButton { disabled: loading(), onclick: move |_| on_back.call(()) }

            RegistrantSummary { record: pending.record.clone() }

            section {
                class: "card payment__account",
                h2 { class: "card__title", "Transfer details" }
                p { class: "payment__hint", "Please complete the transfer to the account below." }
                div {
                    class: "payment__number",
                    span { "{account}" }
                    button {
                        class: "button button--small",
                        r#type: "button",
                        onclick: handle_copy,
                        if copied() {
                            Icon { icon: FaCheck, width: 12, height: 12 }
                            span { "Copied" }
                        } else {
                            Icon { icon: FaCopy, width: 12, height: 12 }
                            span { "Copy" }
                        }
                    }
                }
                p { class: "payment__tip", "{payment.depositor_note}" }
            }

            if let Some(err) = error() {
                div { class: "banner banner--error", role: "alert", "{err}" }
            }

            label {
                class: "payment__confirm",
                input {
                    r#type: "checkbox",
                    checked: confirmed(),
                    disabled: loading(),
                    onchange: move |evt: FormEvent| confirmed.set(evt.checked()),
                }
                span { "I have completed the transfer" }
            }

            button {
                class: "button button--primary button--large",
                r#type: "button",
                disabled: !confirmed() || loading(),
                onclick: handle_submit,
                if loading() { "Submitting..." } else { "Complete registration" }
            }
        }
    }
}
