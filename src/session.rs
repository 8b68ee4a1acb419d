use std::fmt;

use anyhow::{anyhow, bail, ensure, Context};
use chrono::{Duration, Utc};
use dioxus_logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{ADMIN_USERNAME, SESSION_TTL_HOURS};

const SESSION_KEY: &str = "rent_ride_session";
const DEFAULT_TTL_HOURS: i64 = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

impl From<&str> for Role {
    // anything that isn't exactly ADMIN is a regular customer
    fn from(s: &str) -> Self {
        match s {
            "ADMIN" => Role::Admin,
            _ => Role::Customer,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::Customer => f.write_str("CUSTOMER"),
        }
    }
}

/// Current session as seen by the rest of the app.
///
/// `role` and `username` only mean something while `is_logged_in` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub is_logged_in: bool,
    pub role: Role,
    pub username: String,
}

/// What the navigation needs to know about a [`UserState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState<'a> {
    Anonymous,
    Admin { username: &'a str },
    Customer { username: &'a str },
}

impl UserState {
    pub fn signed_in(username: impl Into<String>, role: Role) -> Self {
        Self {
            is_logged_in: true,
            role,
            username: username.into(),
        }
    }

    pub fn nav_state(&self) -> NavState<'_> {
        if !self.is_logged_in {
            return NavState::Anonymous;
        }

        match self.role {
            Role::Admin => NavState::Admin {
                username: &self.username,
            },
            Role::Customer => NavState::Customer {
                username: &self.username,
            },
        }
    }
}

pub fn authenticate(username: &str, password: &str) -> anyhow::Result<UserState> {
    let username = username.trim();

    ensure!(!username.is_empty(), "username is required");
    ensure!(!password.is_empty(), "password is required");

    let role = if username == ADMIN_USERNAME {
        Role::Admin
    } else {
        Role::Customer
    };

    Ok(UserState::signed_in(username, role))
}

pub fn register(username: &str, password: &str, confirm: &str) -> anyhow::Result<UserState> {
    let username = username.trim();

    ensure!(!username.is_empty(), "username is required");

    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        bail!("username can't contain '{}'", c);
    }

    ensure!(!password.is_empty(), "password is required");
    ensure!(password == confirm, "passwords don't match");

    Ok(UserState::signed_in(username, Role::Customer))
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user: UserState,
    expires_at: i64,
}

pub fn is_expired(expires_at: i64, now: i64) -> bool {
    expires_at <= now
}

pub fn session_ttl() -> Duration {
    parse_ttl(SESSION_TTL_HOURS)
}

fn parse_ttl(raw: &str) -> Duration {
    let ttl = raw
        .parse::<i64>()
        .ok()
        .filter(|hours| *hours > 0)
        .and_then(Duration::try_hours);

    match ttl {
        Some(ttl) => ttl,
        None => {
            warn!(
                "invalid SESSION_TTL_HOURS {:?}, using {}",
                raw, DEFAULT_TTL_HOURS
            );

            Duration::hours(DEFAULT_TTL_HOURS)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage() -> anyhow::Result<web_sys::Storage> {
    bail!("local storage is only available in the browser")
}

#[cfg(target_arch = "wasm32")]
fn storage() -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
        .context("failed to get window")?
        .local_storage()
        .map_err(|_| anyhow!("failed to get local storage"))?
        .context("failed to get storage")
}

/// Restores a previously saved session, dropping it if it is unreadable or expired.
pub fn load_session() -> Option<UserState> {
    let storage = storage().ok()?;
    let raw = storage.get_item(SESSION_KEY).ok()??;

    let session = match serde_json::from_str::<StoredSession>(&raw) {
        Ok(s) => s,
        Err(e) => {
            warn!("dropping malformed session: {}", e);
            storage.remove_item(SESSION_KEY).ok()?;

            return None;
        }
    };

    if is_expired(session.expires_at, Utc::now().timestamp()) {
        info!("session for {} expired", session.user.username);
        storage.remove_item(SESSION_KEY).ok()?;

        return None;
    }

    info!("restored session for {}", session.user.username);

    Some(session.user)
}

pub fn save_session(user: &UserState) -> anyhow::Result<()> {
    let expires_at = Utc::now()
        .checked_add_signed(session_ttl())
        .context("session expiry out of range")?;

    let session = StoredSession {
        user: user.clone(),
        expires_at: expires_at.timestamp(),
    };

    let raw = serde_json::to_string(&session).context("failed to serialize session")?;

    storage()?
        .set_item(SESSION_KEY, &raw)
        .map_err(|_| anyhow!("failed to write session"))
}

pub fn clear_session() -> anyhow::Result<()> {
    storage()?
        .remove_item(SESSION_KEY)
        .map_err(|_| anyhow!("failed to remove session"))
}
