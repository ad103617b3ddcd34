use dioxus::prelude::*;
use ui::views::PaymentView;

use crate::Route;

#[component]
pub fn Account() -> Element {
    let nav = use_navigator();

    rsx! {
        PaymentView {
            on_back: move |_| {
                nav.push(Route::Home {});
            },
            on_paid: move |_| {
                nav.replace(Route::Success {});
            },
        }
    }
}
