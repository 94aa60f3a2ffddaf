//! # Settings Command
//!
//! Profile, password, notification and admin settings for the signed-in user.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use owo_colors::{OwoColorize, Stream};

use crate::{
    app::App,
    auth::session,
    settings::{self, AdminSettings, NotificationSettings, PasswordChange, ProfileUpdate},
    ui,
};

/// Requested notification toggles; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationArgs {
    pub email_matches: Option<bool>,
    pub email_claims: Option<bool>,
    pub email_updates: Option<bool>,
    pub push: Option<bool>,
    pub sms: Option<bool>,
}

impl NotificationArgs {
    fn is_empty(&self) -> bool {
        [
            self.email_matches,
            self.email_claims,
            self.email_updates,
            self.push,
            self.sms,
        ]
        .iter()
        .all(Option::is_none)
    }

    fn apply(self, current: NotificationSettings) -> NotificationSettings {
        NotificationSettings {
            email_matches: self.email_matches.unwrap_or(current.email_matches),
            email_claims: self.email_claims.unwrap_or(current.email_claims),
            email_updates: self.email_updates.unwrap_or(current.email_updates),
            push: self.push.unwrap_or(current.push),
            sms: self.sms.unwrap_or(current.sms),
        }
    }
}

/// Requested admin settings; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminArgs {
    pub auto_approval: Option<bool>,
    pub require_photos: Option<bool>,
    pub max_items_per_user: Option<u32>,
    pub item_expiry_days: Option<u32>,
}

impl AdminArgs {
    const fn is_empty(&self) -> bool {
        self.auto_approval.is_none()
            && self.require_photos.is_none()
            && self.max_items_per_user.is_none()
            && self.item_expiry_days.is_none()
    }

    fn apply(self, current: AdminSettings) -> AdminSettings {
        let Self {
            auto_approval,
            require_photos,
            max_items_per_user,
            item_expiry_days,
        } = self;

        AdminSettings {
            auto_approval: auto_approval.unwrap_or(current.auto_approval),
            require_photos: require_photos.unwrap_or(current.require_photos),
            max_items_per_user: max_items_per_user.unwrap_or(current.max_items_per_user),
            item_expiry_days: item_expiry_days.unwrap_or(current.item_expiry_days),
        }
    }
}

fn on_off(value: bool) -> String {
    let label = if value { "on" } else { "off" };
    format!("{}", label.if_supports_color(Stream::Stdout, |t| t.bold()))
}

/// Updates the name or avatar, or shows the profile when nothing is given.
pub async fn execute_profile(app: &mut App, update: ProfileUpdate) -> Result<()> {
    let user = app.require_user()?.clone();

    if update.is_empty() {
        ui::print_user(&user);
        println!("Avatar: {}", user.avatar.as_deref().unwrap_or("(none)"));
        return Ok(());
    }

    let stored = settings::update_profile(&mut app.store, &user, &update).await?;
    session::save(&stored)?;

    ui::print_success("Profile updated successfully!");
    app.user = Some(stored);
    Ok(())
}

/// Accepts a password change after checking new and confirmation match.
pub async fn execute_password(app: &mut App, change: PasswordChange) -> Result<()> {
    app.require_user()?;
    settings::change_password(app.store.latency(), &change).await?;
    ui::print_success("Password changed successfully!");
    Ok(())
}

/// Saves notification toggles, or shows them when nothing is given.
pub async fn execute_notifications(app: &mut App, args: NotificationArgs) -> Result<()> {
    app.require_user()?;

    if !args.is_empty() {
        let notifications = args.apply(app.preferences.notifications);
        let latency = app.store.latency();
        settings::save_notifications(&mut app.preferences, latency, notifications).await;
        ui::print_success("Notification preferences saved!");
    }

    let current = app.preferences.notifications;
    println!("Email for matches: {}", on_off(current.email_matches));
    println!("Email for claims:  {}", on_off(current.email_claims));
    println!("System updates:    {}", on_off(current.email_updates));
    println!("Push:              {}", on_off(current.push));
    println!("SMS:               {}", on_off(current.sms));
    Ok(())
}

/// Saves admin settings, or shows them when nothing is given.
pub async fn execute_admin(app: &mut App, args: AdminArgs) -> Result<()> {
    app.require_admin("change admin settings")?;

    if args.max_items_per_user == Some(0) || args.item_expiry_days == Some(0) {
        bail!("Limits must be at least 1");
    }

    if !args.is_empty() {
        let admin = args.apply(app.preferences.admin);
        let latency = app.store.latency();
        settings::save_admin(&mut app.preferences, latency, admin).await;
        ui::print_success("Admin settings updated!");
    }

    let current = app.preferences.admin;
    println!("Auto-approve items:  {}", on_off(current.auto_approval));
    println!("Require photos:      {}", on_off(current.require_photos));
    println!("Max items per user:  {}", current.max_items_per_user);
    println!("Item expiry (days):  {}", current.item_expiry_days);
    Ok(())
}
