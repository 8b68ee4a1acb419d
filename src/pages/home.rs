use dioxus::prelude::*;

use crate::{components::user_context::use_user, route::Route, BRAND_NAME};

pub fn Home() -> Element {
    let user = use_user().current();

    rsx! {
        div {
            class: "page page--centered",
            h1 {
                class: "page__hero",
                "Welcome to {BRAND_NAME}"
            }
            p {
                class: "page__lead",
                "Pick a vehicle from the fleet and get on the road."
            }
            if user.is_logged_in {
                Link {
                    to: Route::Fleet,
                    class: "button",
                    "Browse the fleet"
                }
            } else {
                Link {
                    to: Route::Login,
                    class: "button",
                    "Login to rent"
                }
            }
        }
    }
}
