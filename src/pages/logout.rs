use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::{components::user_context::use_user, route::Route};

pub fn Logout() -> Element {
    let mut user = use_user();
    let navigator = use_navigator();

    use_effect(move || {
        if let Err(e) = user.sign_out() {
            warn!("failed to clear session: {}", e);
        }

        navigator.replace(Route::Home);
    });

    rsx! {}
}
