use dioxus::prelude::*;

use crate::{
    components::user_context::use_user,
    route::Route,
    session::{NavState, UserState},
    BRAND_NAME,
};

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: Route,
}

impl NavLink {
    fn new(label: &'static str, to: Route) -> Self {
        Self { label, to }
    }
}

/// Everything the navigation bar shows for one [`UserState`].
#[derive(Clone, Debug, PartialEq)]
pub struct NavModel {
    /// Home link shown as the brand.
    pub brand: NavLink,
    /// Remaining links, in display order.
    pub links: Vec<NavLink>,
    pub greeting: Option<String>,
}

pub fn nav_model(user: &UserState) -> NavModel {
    let brand = NavLink::new(BRAND_NAME, Route::Home);
    let mut links = vec![NavLink::new("Vehicle Fleet", Route::Fleet)];

    let username = match user.nav_state() {
        NavState::Anonymous => {
            links.push(NavLink::new("Register", Route::Register));
            links.push(NavLink::new("Login", Route::Login));

            return NavModel {
                brand,
                links,
                greeting: None,
            };
        }
        NavState::Admin { username } => {
            links.push(NavLink::new("Add vehicle", Route::CreateVehicle));
            links.push(NavLink::new("Pending Rents", Route::PendingRents));
            links.push(NavLink::new("Active Rents", Route::ActiveRents));

            username
        }
        NavState::Customer { username } => {
            links.push(NavLink::new("Available vehicle", Route::AvailableVehicles));
            links.push(NavLink::new(
                "My Purchases",
                Route::MyPurchases {
                    username: username.to_string(),
                },
            ));

            username
        }
    };

    links.push(NavLink::new("Logout", Route::Logout));

    NavModel {
        brand,
        links,
        greeting: Some(format!("Hello, {}!", username)),
    }
}

#[component]
pub fn NavBar() -> Element {
    let user = use_user().current();
    let NavModel {
        brand,
        links,
        greeting,
    } = nav_model(&user);

    rsx! {
        header {
            nav {
                class: "navbar",
                div {
                    class: "navbar__inner",
                    Link {
                        to: brand.to,
                        class: "navbar__brand",
                        "{brand.label}"
                    }
                    for link in links {
                        Link {
                            to: link.to,
                            class: "navbar__link",
                            active_class: "navbar__link--active",
                            "{link.label}"
                        }
                    }
                    if let Some(greeting) = greeting {
                        span {
                            class: "navbar__greeting",
                            "{greeting}"
                        }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn targets(model: &NavModel) -> Vec<String> {
        std::iter::once(&model.brand)
            .chain(&model.links)
            .map(|l| l.to.to_string())
            .collect()
    }

    #[test]
    fn anonymous_gets_register_and_login_only() {
        let model = nav_model(&UserState::default());

        assert_eq!(targets(&model), ["/", "/cars/all", "/register", "/login"]);
        assert_eq!(model.brand, NavLink::new(BRAND_NAME, Route::Home));
        assert_eq!(model.greeting, None);
    }

    #[test]
    fn anonymous_ignores_stale_role_and_name() {
        let user = UserState {
            is_logged_in: false,
            role: Role::Admin,
            username: "boss".to_string(),
        };

        assert_eq!(nav_model(&user), nav_model(&UserState::default()));
    }

    #[test]
    fn admin_links() {
        let model = nav_model(&UserState::signed_in("boss", Role::Admin));

        assert_eq!(
            targets(&model),
            [
                "/",
                "/cars/all",
                "/cars/create",
                "/rents/pending",
                "/rents/active",
                "/logout"
            ]
        );

        let labels: Vec<_> = model.links.iter().map(|l| l.label).collect();
        assert!(!labels.contains(&BRAND_NAME));
        for missing in ["Available vehicle", "My Purchases", "Register", "Login"] {
            assert!(!labels.contains(&missing), "{missing} shown to admin");
        }

        assert_eq!(model.greeting.as_deref(), Some("Hello, boss!"));
    }

    #[test]
    fn customer_links() {
        let model = nav_model(&UserState::signed_in("alice", Role::Customer));

        assert_eq!(
            targets(&model),
            [
                "/",
                "/cars/all",
                "/cars/available",
                "/sales/all/alice",
                "/logout"
            ]
        );
        assert_eq!(model.links[2].label, "My Purchases");
        assert!(model.greeting.unwrap().contains("alice"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let user = UserState::signed_in("alice", Role::Customer);

        assert_eq!(nav_model(&user), nav_model(&user));
    }

    #[test]
    fn username_only_changes_purchases_and_greeting() {
        let alice = nav_model(&UserState::signed_in("alice", Role::Customer));
        let bob = nav_model(&UserState::signed_in("bob", Role::Customer));

        assert_eq!(alice.brand, bob.brand);
        assert_eq!(alice.links.len(), bob.links.len());

        let changed: Vec<_> = alice
            .links
            .iter()
            .zip(&bob.links)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| {
                assert_eq!(a.label, b.label);
                b.to.to_string()
            })
            .collect();

        assert_eq!(changed, ["/sales/all/bob"]);
        assert_eq!(bob.greeting.as_deref(), Some("Hello, bob!"));
        assert_ne!(alice.greeting, bob.greeting);
    }

    #[test]
    fn admin_username_is_not_validated() {
        let model = nav_model(&UserState::signed_in("", Role::Admin));

        assert_eq!(model.greeting.as_deref(), Some("Hello, !"));
    }
}
