use dioxus::prelude::*;

#[component]
pub fn MyPurchases(username: String) -> Element {
    rsx! {
        div {
            class: "page",
            h1 {
                class: "page__title",
                "My Purchases"
            }
            p {
                class: "page__text",
                "Rentals made by {username}."
            }
        }
    }
}
