use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

/// A labelled text input with an inline error line.
#[component]
pub fn FormField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(!optional)] error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
    #[props(default)] onblur: EventHandler<()>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div {
            class: "form-field",
            label { class: "form-field__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: if invalid { "form-field__input form-field__input--invalid" } else { "form-field__input" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                autofocus: true,
                "aria-invalid": "{invalid}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                onkeydown: move |evt| onkeydown.call(evt),
                onblur: move |_| onblur.call(()),
            }
            if let Some(message) = error {
                p {
                    class: "form-field__error",
                    Icon { icon: FaCircleExclamation, width: 12, height: 12 }
                    " {message}"
                }
            }
        }
    }
}
