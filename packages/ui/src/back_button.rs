use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::Icon;

#[component]
pub fn BackButton(
    #[props(default = "Back".to_string())] label: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "back-button",
            r#type: "button",
            disabled,
            onclick: move |_| onclick.call(()),
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
