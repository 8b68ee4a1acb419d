#![allow(non_snake_case)]

use components::user_context::UserProvider;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use route::Route;

mod components;
mod pages;
mod route;
mod session;

pub static BRAND_NAME: &str = match option_env!("BRAND_NAME") {
    Some(x) => x,
    None => "Rent-Ride",
};
pub static ADMIN_USERNAME: &str = match option_env!("ADMIN_USERNAME") {
    Some(x) => x,
    None => "admin",
};
pub static SESSION_TTL_HOURS: &str = match option_env!("SESSION_TTL_HOURS") {
    Some(x) => x,
    None => "24",
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting {}", BRAND_NAME);
    launch(App);
}

fn App() -> Element {
    rsx! {
        document::Title { "{BRAND_NAME}" }
        document::Stylesheet {
            href: asset!("/assets/main.css")
        }
        UserProvider {
            Router::<Route> {}
        }
    }
}
