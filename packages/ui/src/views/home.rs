use dioxus::prelude::*;

use crate::icons::{FaBell, FaCalendar, FaComments, FaLocationDot, FaTicket};
use crate::session::use_event_config;
use crate::Icon;

/// Landing page: when and where, who is playing, the house rules, and the
/// two ways in (register now, or ask to be notified).
#[component]
pub fn HomeView(on_join: EventHandler<()>, on_interest: EventHandler<()>) -> Element {
    let config = use_event_config();
    let event = config.read().event.clone();
    let notice = config.read().notice.clone();

    rsx! {
        div {
            class: "home",
            section {
                class: "home__hero",
                h1 { class: "home__title", "{event.title}" }
                p { class: "home__tagline", "{event.tagline}" }
            }

            section {
                class: "card home__details",
                div {
                    class: "home__detail",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    div {
                        p { class: "home__venue", "{event.venue}" }
                        p { class: "home__address", "{event.address}" }
                    }
                }
                div {
                    class: "home__detail",
                    Icon { icon: FaCalendar, width: 14, height: 14 }
                    p { class: "home__schedule", "{event.schedule}" }
                }
            }

            if !event.lineup.is_empty() {
                section {
                    class: "card home__lineup",
                    h2 { class: "card__title", "DJ" }
                    ul {
                        for dj in event.lineup.iter() {
                            li { key: "{dj}", "{dj}" }
                        }
                    }
                }
            }

            div {
                class: "home__actions",
                button {
                    class: "button button--primary button--large",
                    r#type: "button",
                    onclick: move |_| on_join.call(()),
                    Icon { icon: FaTicket, width: 18, height: 18 }
                    span { "Apply" }
                }
                button {
                    class: "button button--outline",
                    r#type: "button",
                    onclick: move |_| on_interest.call(()),
                    Icon { icon: FaBell, width: 14, height: 14 }
                    span { "Notify me about the next party" }
                }
            }

            if !notice.is_empty() {
                section {
                    class: "card home__notice",
                    h2 { class: "card__title", "NOTICE" }
                    for entry in notice.iter() {
                        div {
                            key: "{entry.heading}",
                            class: "home__notice-entry",
                            h3 { "{entry.heading}" }
                            ul {
                                for (i, line) in entry.lines.iter().enumerate() {
                                    li { key: "{i}", "{line}" }
                                }
                            }
                        }
                    }
                }
            }

            if !event.inquiry_url.is_empty() {
                a {
                    class: "button button--outline home__inquiry",
                    href: "{event.inquiry_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: FaComments, width: 14, height: 14 }
                    span { "1:1 inquiry" }
                }
            }
        }
    }
}
