//! # Application Context
//!
//! The composition root: configuration, the session's item store, and the
//! signed-in user. Commands receive it by `&mut` and never reach for globals.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    auth::{self, session, AuthError},
    config::Config,
    settings::Preferences,
    store::ItemStore,
    user::User,
};

/// Everything a command needs for one session
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub store: ItemStore,
    pub user: Option<User>,
    /// Notification and admin settings, kept until the process exits
    pub preferences: Preferences,
}

impl App {
    /// Loads the store and restores the persisted session, if any.
    ///
    /// An unreadable session record counts as signed out.
    pub async fn start(config: Config) -> Self {
        let mut store = ItemStore::load(&config).await;
        let user = match session::load() {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable session");
                None
            }
        };
        let user = user.map(|user| store.register_user(user));

        Self::new(config, store, user)
    }

    /// Assembles a context from parts (tests, embedding).
    pub fn new(config: Config, store: ItemStore, user: Option<User>) -> Self {
        Self {
            config,
            store,
            user,
            preferences: Preferences::default(),
        }
    }

    /// The signed-in user.
    pub fn require_user(&self) -> Result<&User, AuthError> {
        auth::require_user(self.user.as_ref())
    }

    /// The signed-in administrator.
    pub fn require_admin(&self, action: &'static str) -> Result<&User, AuthError> {
        auth::require_admin(self.user.as_ref(), action)
    }
}
