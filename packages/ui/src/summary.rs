use dioxus::prelude::*;
use registration::{Field, UserRecord};

/// Card listing what the registrant entered.
#[component]
pub fn RegistrantSummary(record: UserRecord) -> Element {
    rsx! {
        section {
            class: "card summary",
            h2 { class: "card__title", "Registrant" }
            dl {
                class: "summary__list",
                for field in Field::ALL {
                    div {
                        key: "{field}",
                        class: "summary__row",
                        dt { "{field.label()}" }
                        dd { "{field.get(&record)}" }
                    }
                }
            }
        }
    }
}
