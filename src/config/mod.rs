//! # Configuration
//!
//! Handles the user configuration stored at `~/.config/lostfound/config`.
//! A missing file means every setting takes its default; `lf setup` writes a
//! commented file to edit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        CONFIG_DIR, CONFIG_FILENAME, DEFAULT_EMAIL_DOMAIN, DEFAULT_ID_PATTERN,
        DEFAULT_INITIAL_LOAD_MS, DEFAULT_LATENCY_MS, DEFAULT_LOG_LEVEL, DEFAULT_RECENT_LIMIT,
    },
    id,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config and session files to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Home directory, honoring the test override.
pub(crate) fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(dirs::home_dir)
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency for reports, status changes and login (ms)
    pub latency_ms: u64,

    /// Simulated latency for the initial item fetch (ms)
    pub initial_load_ms: u64,

    /// Accepted login email suffix
    pub email_domain: String,

    /// Pattern for generated IDs
    pub id_pattern: String,

    /// Number of items in the dashboard "recent" section
    pub recent_limit: usize,

    /// `tracing` filter directive (overridden by `RUST_LOG`)
    pub log_level: String,

    /// Whether the session starts with the demo users and reports
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            initial_load_ms: DEFAULT_INITIAL_LOAD_MS,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Returns the config directory (`~/.config/lostfound`).
    ///
    /// Honors the thread-local home override first (used by tests).
    pub fn dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".config").join(CONFIG_DIR))
    }

    /// Returns the path to the config file (`~/.config/lostfound/config`).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    /// Loads the config file, or the defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate().with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Checks settings the TOML types cannot express.
    pub fn validate(&self) -> Result<()> {
        if !id::has_random(&self.id_pattern) {
            bail!(
                "id_pattern '{}' needs a %R token so generated IDs stay unique",
                self.id_pattern
            );
        }
        Ok(())
    }

    /// Writes the default config with comments.
    /// Returns true if created, false if a file already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default().to_commented_toml())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(true)
    }

    /// Renders the config as TOML with a comment above every option.
    pub fn to_commented_toml(&self) -> String {
        format!(
            r#"# lostfound Configuration
# Location: ~/.config/lostfound/config

# Simulated network latency, in milliseconds, for reporting an item,
# changing an item's status, and signing in. Set to 0 for scripting.
# Default: {DEFAULT_LATENCY_MS}
latency_ms = {latency_ms}

# Simulated latency, in milliseconds, before the item list first loads.
# Default: {DEFAULT_INITIAL_LOAD_MS}
initial_load_ms = {initial_load_ms}

# Only email addresses ending with this suffix may sign in.
# Default: "{DEFAULT_EMAIL_DOMAIN}"
email_domain = "{email_domain}"

# Pattern for generated item and user IDs.
#   %y %m %d  - Year, month, day (2 digits each)
#   %j        - Day of year (3 digits)
#   %T        - Seconds since midnight UTC as Base32 (4 chars)
#   %R        - Random Base32 character (repeat for more: %RRR = 3 chars)
#   %%        - Literal percent sign
# The pattern must contain at least one %R.
# Default: "{DEFAULT_ID_PATTERN}"
id_pattern = "{id_pattern}"

# Number of items shown under "Recent items" in `lf stats`.
# Default: {DEFAULT_RECENT_LIMIT}
recent_limit = {recent_limit}

# Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
# Default: "{DEFAULT_LOG_LEVEL}"
log_level = "{log_level}"

# Start every session with the demo accounts and reports.
# Default: true
seed_demo_data = {seed_demo_data}
"#,
            latency_ms = self.latency_ms,
            initial_load_ms = self.initial_load_ms,
            email_domain = self.email_domain,
            id_pattern = self.id_pattern,
            recent_limit = self.recent_limit,
            log_level = self.log_level,
            seed_demo_data = self.seed_demo_data,
        )
    }
}
