use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::session::{self, UserState};

/// Handle to the shared [`UserState`]. Reading it from a component subscribes
/// that component to sign-in and sign-out.
#[derive(Clone, Copy)]
pub struct UserContext {
    state: Signal<UserState>,
}

impl UserContext {
    pub fn current(&self) -> UserState {
        self.state.cloned()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in
    }

    /// Replaces the current user and persists it. The in-memory state changes
    /// even if persisting fails.
    pub fn sign_in(&mut self, user: UserState) -> anyhow::Result<()> {
        info!("signed in as {} ({})", user.username, user.role);

        self.state.set(user.clone());

        session::save_session(&user)
    }

    pub fn sign_out(&mut self) -> anyhow::Result<()> {
        info!("signed out");

        self.state.set(UserState::default());

        session::clear_session()
    }
}

#[component]
pub fn UserProvider(children: Element) -> Element {
    let state = use_signal(|| session::load_session().unwrap_or_default());

    use_context_provider(|| UserContext { state });

    rsx! {
        {children}
    }
}

pub fn use_user() -> UserContext {
    use_context::<UserContext>()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::session::Role;

    thread_local! {
        static MOUNTED: Cell<Option<UserContext>> = const { Cell::new(None) };
    }

    fn Capture() -> Element {
        let user = use_user();
        MOUNTED.with(|m| m.set(Some(user)));

        rsx! {}
    }

    fn Root() -> Element {
        rsx! {
            UserProvider {
                Capture {}
            }
        }
    }

    #[test]
    fn state_follows_sign_in_and_out_without_storage() {
        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();

        let mut user = MOUNTED
            .with(|m| m.get())
            .expect("provider child not rendered");

        dom.in_runtime(|| {
            assert_eq!(user.current(), UserState::default());
            assert!(!user.is_logged_in());

            let alice = UserState::signed_in("alice", Role::Customer);

            // no browser storage outside wasm, so persisting fails
            assert!(user.sign_in(alice.clone()).is_err());
            assert_eq!(user.current(), alice);
            assert!(user.is_logged_in());

            assert!(user.sign_out().is_err());
            assert_eq!(user.current(), UserState::default());
            assert!(!user.is_logged_in());
        });
    }
}
