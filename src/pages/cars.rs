use dioxus::prelude::*;

#[component]
fn Section(title: String, description: String) -> Element {
    rsx! {
        div {
            class: "page",
            h1 {
                class: "page__title",
                "{title}"
            }
            p {
                class: "page__text",
                "{description}"
            }
        }
    }
}

pub fn Fleet() -> Element {
    rsx! {
        Section {
            title: "Vehicle Fleet",
            description: "Every vehicle we rent out.",
        }
    }
}

pub fn CreateVehicle() -> Element {
    rsx! {
        Section {
            title: "Add vehicle",
            description: "Register a new vehicle in the fleet.",
        }
    }
}

pub fn AvailableVehicles() -> Element {
    rsx! {
        Section {
            title: "Available vehicles",
            description: "Vehicles you can rent right now.",
        }
    }
}
