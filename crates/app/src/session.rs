//! The one place that reads and writes the browser session.
//!
//! Components never touch local storage directly. They read the reactive
//! [`SessionContext`], which re-reads storage on login, on logout and
//! whenever another tab changes it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::str::FromStr;

use common::token::{Claims, decode_claims};
use data::auth::TokenResponse;
use data::user::Role;
use leptos::ev;
use leptos::prelude::*;
use tracing::warn;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    warn!("Failed to store {key}: {e:?}");
                }
            }
            None => warn!("Local storage unavailable, {key} not stored"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!("Failed to remove {key}: {e:?}");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Snapshot of the stored session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub claims: Option<Claims>,
}

impl Session {
    /// Reads token and role. A token whose `exp` lies in the past counts as
    /// absent; an unknown role string counts as no role.
    pub fn load(store: &impl SessionStore, now: i64) -> Self {
        let token = store.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let claims = token.as_deref().and_then(|token| decode_claims(token).ok());

        if claims.as_ref().is_some_and(|claims| claims.is_expired(now)) {
            return Session::default();
        }

        let role = store
            .get(ROLE_KEY)
            .and_then(|role| Role::from_str(&role).ok());

        Session {
            token,
            role,
            claims,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.claims.as_ref().map(|claims| claims.sub.as_str())
    }
}

pub fn store_login(store: &impl SessionStore, response: &TokenResponse) {
    store.set(TOKEN_KEY, &response.access_token);
    match response.role {
        Some(role) => store.set(ROLE_KEY, role.as_ref()),
        None => store.remove(ROLE_KEY),
    }
}

pub fn clear(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(ROLE_KEY);
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(Session::load(&BrowserStorage, now())),
        }
    }

    pub fn get(&self) -> Session {
        self.state.get()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(|session| session.role)
    }

    pub fn role_untracked(&self) -> Option<Role> {
        self.state.with_untracked(|session| session.role)
    }

    pub fn username(&self) -> Option<String> {
        self.state
            .with(|session| session.username().map(str::to_string))
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|session| session.token.clone())
    }

    pub fn refresh(&self) {
        self.state.set(Session::load(&BrowserStorage, now()));
    }

    pub fn login(&self, response: &TokenResponse) {
        store_login(&BrowserStorage, response);
        self.refresh();
    }

    pub fn logout(&self) {
        clear(&BrowserStorage);
        self.refresh();
    }
}

pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);

    let _ = window_event_listener(ev::storage, move |_| session.refresh());

    session
}

pub fn expect_session() -> SessionContext {
    expect_context::<SessionContext>()
}
