use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_join: move |_| {
                nav.push(Route::Join {});
            },
            on_interest: move |_| {
                nav.push(Route::Interest {});
            },
        }
    }
}
