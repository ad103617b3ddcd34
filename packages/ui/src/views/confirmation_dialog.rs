use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no question in a modal. Clicking the backdrop counts as cancel.
#[component]
pub fn ConfirmationDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !busy {
                    on_cancel.call(())
                }
            },
            div {
                class: "dialog",
                h2 { class: "dialog__title", "{title}" }
                p { class: "dialog__message", "{message}" }
                div {
                    class: "dialog__actions",
                    button {
                        class: "button button--outline",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Saving..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
