use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page page--centered",
            h1 {
                class: "page__title",
                "Page not found"
            }
            p {
                class: "page__lead",
                "Nothing lives at /{path}."
            }
            Link {
                to: Route::Home,
                class: "page__back",
                "← Back home"
            }
        }
    }
}
