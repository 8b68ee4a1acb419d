use dioxus::prelude::*;

pub fn PendingRents() -> Element {
    rsx! {
        div {
            class: "page",
            h1 {
                class: "page__title",
                "Pending Rents"
            }
            p {
                class: "page__text",
                "Rent requests waiting for approval."
            }
        }
    }
}

pub fn ActiveRents() -> Element {
    rsx! {
        div {
            class: "page",
            h1 {
                class: "page__title",
                "Active Rents"
            }
            p {
                class: "page__text",
                "Vehicles currently out on the road."
            }
        }
    }
}
