use dioxus::prelude::*;

use registration::EventConfig;
use ui::SessionProvider;
use views::{Account, Home, Interest, InterestSuccess, Join, Success};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/join")]
    Join {},
    #[route("/account")]
    Account {},
    #[route("/success")]
    Success {},
    #[route("/interest")]
    Interest {},
    #[route("/interest-success")]
    InterestSuccess {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Event details baked into the bundle.
const EVENT_TOML: &str = include_str!("../event.toml");

fn main() {
    dioxus::launch(App);
}

fn load_event_config() -> EventConfig {
    EventConfig::from_toml(EVENT_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", EventConfig::filename(), e);
        EventConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_event_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::REGISTRATION_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_event_config_parses() {
        let config = EventConfig::from_toml(EVENT_TOML).unwrap();
        assert_eq!(config.event.title, "CHA CHA CHA");
        assert_eq!(config.event.lineup.len(), 5);
        assert_eq!(config.notice.len(), 3);
        assert!(config.event.inquiry_url.starts_with("https://"));
        assert_eq!(
            config.payment.display_account(),
            "KB Kookmin Bank 123-456-789012"
        );
    }
}
