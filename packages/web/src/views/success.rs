use dioxus::prelude::*;
use registration::Category;
use ui::views::SuccessView;

use crate::Route;

#[component]
pub fn Success() -> Element {
    let nav = use_navigator();

    rsx! {
        SuccessView {
            category: Category::Join,
            on_home: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

#[component]
pub fn InterestSuccess() -> Element {
    let nav = use_navigator();

    rsx! {
        SuccessView {
            category: Category::Interest,
            on_home: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
