use dioxus::prelude::*;

use crate::{
    components::navbar::NavBar,
    pages::{
        cars::{AvailableVehicles, CreateVehicle, Fleet},
        home::Home,
        login::Login,
        logout::Logout,
        not_found::PageNotFound,
        register::Register,
        rents::{ActiveRents, PendingRents},
        sales::MyPurchases,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
    #[route("/")]
    Home,
    #[nest("/cars")]
        #[route("/all")]
        Fleet,
        #[route("/create")]
        CreateVehicle,
        #[route("/available")]
        AvailableVehicles,
    #[end_nest]
    #[nest("/rents")]
        #[route("/pending")]
        PendingRents,
        #[route("/active")]
        ActiveRents,
    #[end_nest]
    #[route("/sales/all/:username")]
    MyPurchases { username: String },
    #[route("/register")]
    Register,
    #[route("/login")]
    Login,
    #[route("/logout")]
    Logout,
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Fleet.to_string(), "/cars/all");
        assert_eq!(Route::CreateVehicle.to_string(), "/cars/create");
        assert_eq!(Route::AvailableVehicles.to_string(), "/cars/available");
        assert_eq!(Route::PendingRents.to_string(), "/rents/pending");
        assert_eq!(Route::ActiveRents.to_string(), "/rents/active");
        assert_eq!(Route::Register.to_string(), "/register");
        assert_eq!(Route::Login.to_string(), "/login");
        assert_eq!(Route::Logout.to_string(), "/logout");
        assert_eq!(
            Route::MyPurchases {
                username: "alice".to_string()
            }
            .to_string(),
            "/sales/all/alice"
        );
    }

    #[test]
    fn purchases_path_parses_back() {
        let route = "/sales/all/bob".parse::<Route>().ok();

        assert_eq!(
            route,
            Some(Route::MyPurchases {
                username: "bob".to_string()
            })
        );
    }
}
