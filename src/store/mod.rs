//! # Item Store
//!
//! The in-memory, authoritative holder of reports and users for one session.
//!
//! Mutations and the initial fetch pause for a configurable delay standing in
//! for network latency. The store has a single owner and is mutated through
//! `&mut self`, so concurrent writers cannot occur.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod seed;

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    config::Config,
    id,
    item::{
        lifecycle::{self, Action, TransitionError},
        search::{self, SearchFilters, StatusFilter},
        Item, ItemDraft, Status,
    },
    user::User,
};

/// Item store failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No item found with ID '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Simulated latency settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    /// Delay before each mutation takes effect
    pub mutation: Duration,
    /// Delay before the first fetch returns
    pub initial_load: Duration,
}

impl Latency {
    /// No delay at all (tests, scripting).
    pub const fn none() -> Self {
        Self {
            mutation: Duration::ZERO,
            initial_load: Duration::ZERO,
        }
    }

    /// Latency taken from the configuration file.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            mutation: Duration::from_millis(config.latency_ms),
            initial_load: Duration::from_millis(config.initial_load_ms),
        }
    }
}

/// Waits for `delay`. Not cancellable, no timeout.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// In-memory item and user collection
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Arc<Item>>,
    users: Vec<User>,
    latency: Latency,
    id_pattern: String,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new(latency: Latency) -> Self {
        Self::with_data(Vec::new(), Vec::new(), latency)
    }

    /// Creates a store from existing collections. `items` must be newest first.
    pub fn with_data(items: Vec<Arc<Item>>, users: Vec<User>, latency: Latency) -> Self {
        Self {
            items,
            users,
            latency,
            id_pattern: id::DEFAULT_ID_PATTERN.to_string(),
        }
    }

    /// Creates a store holding the demo users and reports.
    pub fn seeded(latency: Latency) -> Self {
        let users = seed::users();
        let items = seed::items(&users);
        Self::with_data(items, users, latency)
    }

    /// Builds the session store described by `config`, waiting out the
    /// simulated initial fetch.
    pub async fn load(config: &Config) -> Self {
        let latency = Latency::from_config(config);
        simulate_latency(latency.initial_load).await;

        let mut store = if config.seed_demo_data {
            Self::seeded(latency)
        } else {
            Self::new(latency)
        };
        store.id_pattern.clone_from(&config.id_pattern);
        tracing::debug!(items = store.items.len(), "item store loaded");
        store
    }

    /// Returns the configured latency.
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// All items, newest first.
    pub fn list_items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Looks up an item by exact ID.
    pub fn get(&self, id: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The `limit` most recently reported items.
    pub fn recent(&self, limit: usize) -> &[Arc<Item>] {
        &self.items[..limit.min(self.items.len())]
    }

    /// Items reported by `user_id`, newest first.
    pub fn items_by_user(&self, user_id: &str) -> Vec<Arc<Item>> {
        self.items
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Reports a new item on behalf of `reporter` and puts it first.
    ///
    /// Never fails; drafts are validated by the caller.
    pub async fn add_item(&mut self, reporter: &User, draft: ItemDraft) -> Arc<Item> {
        simulate_latency(self.latency.mutation).await;

        let now = Utc::now();
        let item = Arc::new(Item::from_draft(self.fresh_id(now), draft, reporter, now));
        self.items.insert(0, Arc::clone(&item));

        tracing::info!(id = %item.id, kind = %item.kind, reporter = %reporter.id, "item reported");
        item
    }

    /// Replaces the status of the item with `item_id` and refreshes its
    /// `updated_at`.
    ///
    /// A new sequence is built; every other item is carried over as the same
    /// `Arc`. An unknown ID leaves the store untouched and reports
    /// [`StoreError::NotFound`].
    pub async fn update_item_status(
        &mut self,
        item_id: &str,
        status: Status,
    ) -> Result<Arc<Item>, StoreError> {
        simulate_latency(self.latency.mutation).await;

        if self.get(item_id).is_none() {
            tracing::warn!(id = %item_id, %status, "status update for unknown item");
            return Err(StoreError::NotFound(item_id.to_string()));
        }

        let now = Utc::now();
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id == item_id {
                    Arc::new(item.with_status(status, now))
                } else {
                    Arc::clone(item)
                }
            })
            .collect();

        let updated = self
            .get(item_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(item_id.to_string()))?;
        tracing::info!(id = %item_id, %status, "item status updated");
        Ok(updated)
    }

    /// Admin approval: `pending -> verified`.
    pub async fn approve(&mut self, item_id: &str) -> Result<Arc<Item>, StoreError> {
        let next = self.check(item_id, Action::Approve)?;
        self.update_item_status(item_id, next).await
    }

    /// Owner pickup of a found item: `verified -> claimed`.
    pub async fn claim(&mut self, item_id: &str) -> Result<Arc<Item>, StoreError> {
        let next = self.check(item_id, Action::Claim)?;
        self.update_item_status(item_id, next).await
    }

    /// Admin rejection of a pending report.
    ///
    /// Reports are never removed and there is no rejected status, so the
    /// store is left as it is and the unchanged item is returned.
    pub async fn reject(&mut self, item_id: &str) -> Result<Arc<Item>, StoreError> {
        self.check(item_id, Action::Reject)?;
        simulate_latency(self.latency.mutation).await;

        tracing::warn!(id = %item_id, "rejection recorded nowhere; item left pending");
        self.get(item_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(item_id.to_string()))
    }

    /// Generates an ID not used by any item in the store.
    fn fresh_id(&self, now: DateTime<Utc>) -> String {
        id::generate_unique(&self.id_pattern, now, |candidate| self.get(candidate).is_some())
    }

    fn check(&self, item_id: &str, action: Action) -> Result<Status, StoreError> {
        let item = self
            .get(item_id)
            .ok_or_else(|| StoreError::NotFound(item_id.to_string()))?;
        Ok(lifecycle::next_status(item, action)?)
    }

    /// Filters the current items (see [`search::filter_items`]).
    pub fn search_items(&self, query: &str, filters: &SearchFilters) -> Vec<Arc<Item>> {
        search::filter_items(&self.items, query, filters)
    }

    /// Admin review queue (see [`search::filter_review_queue`]).
    pub fn review_queue(&self, query: &str, status: StatusFilter) -> Vec<Arc<Item>> {
        search::filter_review_queue(&self.items, query, status)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All known users.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds a user by exact email.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Generates a user ID not used by any known user.
    pub fn fresh_user_id(&self, now: DateTime<Utc>) -> String {
        id::generate_unique(&self.id_pattern, now, |candidate| {
            self.users.iter().any(|user| user.id == candidate)
        })
    }

    /// Adds a user, or replaces the entry with the same email.
    ///
    /// User IDs stay unique: an ID already held by a different email is
    /// replaced with a fresh one. Returns the user as stored.
    pub fn register_user(&mut self, mut user: User) -> User {
        let taken = self
            .users
            .iter()
            .any(|existing| existing.id == user.id && existing.email != user.email);
        if taken {
            let reassigned = self.fresh_user_id(Utc::now());
            tracing::warn!(
                id = %user.id,
                %reassigned,
                email = %user.email,
                "user ID already taken; reassigned"
            );
            user.id = reassigned;
        }

        let index = self.users.iter().position(|u| u.email == user.email);
        match index {
            Some(index) => self.users[index].clone_from(&user),
            None => self.users.push(user.clone()),
        }
        tracing::debug!(id = %user.id, email = %user.email, "user registered");
        user
    }
}
