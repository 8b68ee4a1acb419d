use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::{components::user_context::use_user, route::Route, session};

pub fn Register() -> Element {
    let mut username = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut confirm = use_signal(|| "".to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let mut user = use_user();
    let is_logged_in = user.is_logged_in();
    let navigator = use_navigator();

    use_effect(move || {
        if is_logged_in {
            navigator.replace(Route::Home);
        }
    });

    rsx! {
        div {
            class: "auth",
            div {
                class: "auth__card",
                h5 {
                    class: "auth__title",
                    "Register"
                }
                form {
                    div {
                        label {
                            r#for: "username",
                            class: "auth__label",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            id: "username",
                            class: "auth__input",
                            required: 1,
                            onchange: move |evt| {
                                username.set(evt.value());
                            }
                        }
                    }
                    div {
                        label {
                            r#for: "password",
                            class: "auth__label",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            id: "password",
                            class: "auth__input",
                            required: 1,
                            onchange: move |evt| {
                                password.set(evt.value());
                            }
                        }
                    }
                    div {
                        label {
                            r#for: "confirm_password",
                            class: "auth__label",
                            "Confirm password"
                        }
                        input {
                            r#type: "password",
                            id: "confirm_password",
                            class: "auth__input",
                            required: 1,
                            onchange: move |evt| {
                                confirm.set(evt.value());
                            }
                        }
                    }
                    if let Some(error) = error() {
                        div {
                            class: "auth__error",
                            "{error}"
                        }
                    }
                    div {
                        class: "auth__actions",
                        Link {
                            class: "auth__switch",
                            to: Route::Login, "Or, if you have an account, login!"
                        },
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: move |_| {
                                match session::register(&username.read(), &password.read(), &confirm.read()) {
                                    Ok(state) => {
                                        info!("registered {}", state.username);

                                        if let Err(e) = user.sign_in(state) {
                                            warn!("failed to persist session: {}", e);
                                        }

                                        navigator.replace(Route::Home);
                                    }
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                            },
                            "Register"
                        }
                    }
                }
            }
        }
    }
}
