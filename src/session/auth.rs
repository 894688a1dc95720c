/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Session state on top of a [`SessionStore`]
//!
//! The bearer token is the only piece of state that decides whether the
//! client is authenticated. The user id, the cached user object and the
//! selected favorite list are derived from it and are dropped together with
//! it on logout.

use crate::constants::{SELECTED_FAVORITE_LIST_KEY, TOKEN_KEY, USER_ID_KEY, USER_KEY};
use crate::session::interface::{Credential, SessionStore};
use crate::session::store::MemorySessionStore;
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Keys removed when the credential is cleared
const SESSION_KEYS: [&str; 4] = [
    TOKEN_KEY,
    SELECTED_FAVORITE_LIST_KEY,
    USER_ID_KEY,
    USER_KEY,
];

/// Session-scoped credential and derived values
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    token_ttl: Duration,
}

impl Session {
    /// Creates a session backed by `store`; tokens expire after `token_ttl`
    pub fn new(store: Arc<dyn SessionStore>, token_ttl: Duration) -> Self {
        Self { store, token_ttl }
    }

    /// Creates a session backed by a fresh in-memory store
    pub fn in_memory(token_ttl: Duration) -> Self {
        Self::new(Arc::new(MemorySessionStore::new()), token_ttl)
    }

    /// Returns the stored credential, if any
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.store
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .map(Credential::new)
    }

    /// Stores a new bearer token, replacing the previous one
    pub fn set_credential(&self, token: &str) {
        self.store.set(TOKEN_KEY, token, Some(self.token_ttl));
        info!("Credential stored");
    }

    /// Removes the credential and every value derived from it
    pub fn clear_credential(&self) {
        self.store.remove_all(&SESSION_KEYS);
        info!("Session cleared");
    }

    /// True iff a non-expired credential is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    /// Id of the logged in user
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY).filter(|id| !id.is_empty())
    }

    /// Remembers the id of the logged in user
    pub fn set_user_id(&self, user_id: &str) {
        self.store.set(USER_ID_KEY, user_id, None);
    }

    /// Cached user object from the last token info lookup
    #[must_use]
    pub fn cached_user(&self) -> Option<Value> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Caches the user object returned by the token info lookup
    pub fn set_cached_user(&self, user: &Value) {
        self.store.set(USER_KEY, &user.to_string(), None);
        debug!("Cached user object");
    }

    /// Id of the favorite list currently selected in the UI
    #[must_use]
    pub fn selected_favorite_list_id(&self) -> Option<String> {
        self.store
            .get(SELECTED_FAVORITE_LIST_KEY)
            .filter(|id| !id.is_empty())
    }

    /// Selects a favorite list
    pub fn set_selected_favorite_list_id(&self, list_id: &str) {
        self.store.set(SELECTED_FAVORITE_LIST_KEY, list_id, None);
    }

    /// Forgets the selected favorite list
    pub fn clear_selected_favorite_list(&self) {
        self.store.remove(SELECTED_FAVORITE_LIST_KEY);
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}
