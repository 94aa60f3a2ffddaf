//! # Settings
//!
//! Profile edits, password changes, and notification and admin preferences.
//!
//! Every save waits out the mutation latency like any other store call. A
//! profile edit replaces the stored user record; reports keep the reporter
//! snapshot taken when they were filed. Passwords are never checked or
//! stored, and preferences live for one session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::{
    constants::{DEFAULT_ITEM_EXPIRY_DAYS, DEFAULT_MAX_ITEMS_PER_USER},
    store::{simulate_latency, ItemStore, Latency},
    user::User,
};

/// Rejected settings changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Current and new password are required")]
    MissingPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

// =============================================================================
// Profile
// =============================================================================

/// Requested profile changes; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    /// An empty string removes the avatar.
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Whether nothing would change.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }

    /// Returns `user` with the changes applied.
    pub fn apply(&self, user: &User) -> Result<User, SettingsError> {
        let mut updated = user.clone();

        if let Some(ref name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(SettingsError::EmptyName);
            }
            updated.name = name.to_string();
        }

        if let Some(ref avatar) = self.avatar {
            let avatar = avatar.trim();
            updated.avatar = (!avatar.is_empty()).then(|| avatar.to_string());
        }

        Ok(updated)
    }
}

/// Saves a profile edit for `user` and returns the stored record.
///
/// The email address and role are never changed.
pub async fn update_profile(
    store: &mut ItemStore,
    user: &User,
    update: &ProfileUpdate,
) -> Result<User, SettingsError> {
    let updated = update.apply(user)?;
    simulate_latency(store.latency().mutation).await;

    let stored = store.register_user(updated);
    tracing::info!(id = %stored.id, "profile updated");
    Ok(stored)
}

// =============================================================================
// Password
// =============================================================================

/// A password change request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// Checks the request without waiting.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.current.is_empty() || self.new.is_empty() {
            return Err(SettingsError::MissingPassword);
        }
        if self.new != self.confirm {
            return Err(SettingsError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Accepts a password change. Nothing is stored.
pub async fn change_password(
    latency: Latency,
    change: &PasswordChange,
) -> Result<(), SettingsError> {
    change.validate()?;
    simulate_latency(latency.mutation).await;
    tracing::info!("password change accepted");
    Ok(())
}

// =============================================================================
// Preferences
// =============================================================================

/// Notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Email when a potential match for one of your items appears
    pub email_matches: bool,
    /// Email when someone claims an item you found
    pub email_claims: bool,
    /// Email about new features and maintenance
    pub email_updates: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_matches: true,
            email_claims: true,
            email_updates: false,
            push: true,
            sms: false,
        }
    }
}

/// Moderation settings shown to administrators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSettings {
    pub auto_approval: bool,
    pub require_photos: bool,
    /// Maximum number of active items per user
    pub max_items_per_user: u32,
    /// Days after which unclaimed items expire
    pub item_expiry_days: u32,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            auto_approval: false,
            require_photos: true,
            max_items_per_user: DEFAULT_MAX_ITEMS_PER_USER,
            item_expiry_days: DEFAULT_ITEM_EXPIRY_DAYS,
        }
    }
}

/// Session preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub notifications: NotificationSettings,
    pub admin: AdminSettings,
}

/// Saves notification toggles.
pub async fn save_notifications(
    preferences: &mut Preferences,
    latency: Latency,
    notifications: NotificationSettings,
) {
    simulate_latency(latency.mutation).await;
    preferences.notifications = notifications;
    tracing::info!(?notifications, "notification preferences saved");
}

/// Saves admin settings. Callers check the role.
pub async fn save_admin(preferences: &mut Preferences, latency: Latency, admin: AdminSettings) {
    simulate_latency(latency.mutation).await;
    preferences.admin = admin;
    tracing::info!(?admin, "admin settings saved");
}
