//! # Constants
//!
//! Centralized constants for magic values used throughout lostfound.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for title display in lists (truncated with ellipsis).
pub const UI_TITLE_TRUNCATE_LEN: usize = 32;

/// Maximum length for location display in lists (truncated with ellipsis).
pub const UI_LOCATION_TRUNCATE_LEN: usize = 20;

/// Column width for ID in list display.
pub const UI_COL_ID_WIDTH: usize = 15;

/// Column width for item type in list display.
pub const UI_COL_TYPE_WIDTH: usize = 5;

/// Column width for status in list display.
pub const UI_COL_STATUS_WIDTH: usize = 8;

/// Column width for category in list display.
pub const UI_COL_CATEGORY_WIDTH: usize = 14;

// =============================================================================
// Listings
// =============================================================================

/// Suggested categories offered by the report form. Not a constraint.
pub const CATEGORY_SUGGESTIONS: &[&str] = &[
    "Electronics",
    "Personal Items",
    "Books",
    "Clothing",
    "Sports",
    "Other",
];

/// Suggested campus locations offered by the report form. Not a constraint.
pub const LOCATION_SUGGESTIONS: &[&str] = &[
    "Central Library",
    "Student Union",
    "Recreation Center",
    "Engineering Building",
    "Science Building",
    "Cafeteria",
    "Dormitory",
    "Parking Lot",
];

/// Number of items shown in the dashboard "recent items" section.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Window for the dashboard "this week" counter.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Pattern for generated item and user IDs (see [`crate::id`]).
pub const DEFAULT_ID_PATTERN: &str = "%y%m%d-%T%RRR";

/// Random draws tried before a numeric suffix is appended to a taken ID.
pub const ID_GENERATION_ATTEMPTS: usize = 16;

// =============================================================================
// Simulated Latency
// =============================================================================

/// Delay applied to mutating store calls and login, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Delay applied to the initial item fetch, in milliseconds.
pub const DEFAULT_INITIAL_LOAD_MS: u64 = 500;

// =============================================================================
// Authentication
// =============================================================================

/// Accepted login email suffix.
pub const DEFAULT_EMAIL_DOMAIN: &str = "@university.edu";

/// Storage key under which the signed-in user is persisted.
pub const SESSION_KEY: &str = "user";

/// File extension of the persisted session record.
pub const SESSION_FILE_EXTENSION: &str = "toml";

// =============================================================================
// Settings
// =============================================================================

/// Default cap on active reports per user shown in the admin settings.
pub const DEFAULT_MAX_ITEMS_PER_USER: u32 = 10;

/// Default number of days after which unclaimed items expire.
pub const DEFAULT_ITEM_EXPIRY_DAYS: u32 = 90;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "lostfound";

/// Global configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

// =============================================================================
// Logging
// =============================================================================

/// Default `tracing` filter directive when neither config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Shell Completions
// =============================================================================

/// Zsh completions directory (relative to home).
pub const ZSH_COMPLETIONS_DIR: &str = ".zfunc";

/// Zsh completion file name.
pub const ZSH_COMPLETION_FILE: &str = "_lf";

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Bash completion file name.
pub const BASH_COMPLETION_FILE: &str = "lf";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";

/// Fish completion file name.
pub const FISH_COMPLETION_FILE: &str = "lf.fish";

/// Elvish completions directory (relative to home).
pub const ELVISH_COMPLETIONS_DIR: &str = ".config/elvish/lib";

/// Elvish completion file name.
pub const ELVISH_COMPLETION_FILE: &str = "lf.elv";
