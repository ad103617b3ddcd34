//! Registration session context and hooks for the UI.

use api::{EndpointConfig, SheetsClient};
use dioxus::prelude::*;
use registration::{EventConfig, Session};

/// The current browser session's registration.
/// Returns a signal that updates when a wizard finalizes or a payment is confirmed.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The webhook client shared by every screen.
pub fn use_registrar() -> SheetsClient {
    use_context::<SheetsClient>()
}

pub fn use_event_config() -> Signal<EventConfig> {
    use_context::<Signal<EventConfig>>()
}

/// Provider component that owns the session, the webhook client and the event
/// configuration. Wrap the router with this component.
#[component]
pub fn SessionProvider(config: EventConfig, children: Element) -> Element {
    let session = use_signal(Session::new);
    let event_config = use_signal(move || config);

    use_context_provider(|| session);
    use_context_provider(|| event_config);
    use_context_provider(|| {
        let endpoint = EndpointConfig::from_env();
        SheetsClient::new(endpoint).unwrap_or_else(|e| {
            tracing::error!("Failed to create webhook client: {}", e);
            SheetsClient::disabled()
        })
    });

    rsx! {
        {children}
    }
}
