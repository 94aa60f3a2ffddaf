//! # Session
//!
//! Persists the signed-in user as a single record under the `user` key
//! (`~/.config/lostfound/user.toml`). Nothing else outlives a session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    constants::{SESSION_FILE_EXTENSION, SESSION_KEY},
    user::User,
};

/// Returns the path of the session record.
pub fn path() -> Option<PathBuf> {
    Config::dir().map(|dir| dir.join(format!("{SESSION_KEY}.{SESSION_FILE_EXTENSION}")))
}

/// Writes `user` as the signed-in user, replacing any previous record.
pub fn save(user: &User) -> Result<()> {
    let path = path().context("Could not determine config directory")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(user).context("Failed to serialize session")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write session: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "session saved");
    Ok(())
}

/// Reads the signed-in user, if any.
pub fn load() -> Result<Option<User>> {
    let Some(path) = path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session: {}", path.display()))?;
    let user = toml::from_str(&content)
        .with_context(|| format!("Failed to parse session: {}", path.display()))?;
    Ok(Some(user))
}

/// Erases the session record. Returns false if nobody was signed in.
pub fn clear() -> Result<bool> {
    let Some(path) = path() else {
        return Ok(false);
    };

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path)
        .with_context(|| format!("Failed to remove session: {}", path.display()))?;
    Ok(true)
}
