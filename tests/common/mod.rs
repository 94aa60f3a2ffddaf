//! # Test Harness
//!
//! Provides utilities for integration testing lostfound without affecting user configuration.
//! Library tests redirect the home directory through a thread-local override; binary tests
//! point `HOME` at the same temporary directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use assert_cmd::Command;
use chrono::NaiveDate;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use lostfound::{set_home_override, Item, ItemDraft, ItemKind, ItemStore, Latency, User};

/// Global lock to ensure tests touching the home override run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Config that disables the simulated latency.
pub const QUIET_CONFIG: &str = "latency_ms = 0\ninitial_load_ms = 0\n";

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a quiet config file.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        let env = Self {
            home_dir,
            test_guard,
        };
        env.write_config(QUIET_CONFIG);
        env
    }

    /// Returns the path where the config is stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("lostfound")
            .join("config")
    }

    /// Returns the path where the signed-in user is stored.
    pub fn session_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("lostfound")
            .join("user.toml")
    }

    /// Replaces the config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Creates an `lf` command configured to run in the test environment.
    pub fn lf(&self) -> Command {
        let mut cmd = Command::cargo_bin("lf").expect("lf binary");
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Seeded store without latency.
pub fn seeded_store() -> ItemStore {
    ItemStore::seeded(Latency::none())
}

/// Looks up a demo user by email.
pub fn demo_user(store: &ItemStore, email: &str) -> User {
    store
        .find_user_by_email(email)
        .cloned()
        .unwrap_or_else(|| panic!("no demo user {email}"))
}

/// A complete draft with the given type and title.
pub fn draft(kind: ItemKind, title: &str) -> ItemDraft {
    ItemDraft {
        kind,
        title: title.to_string(),
        description: format!("{title} description"),
        category: "Other".to_string(),
        location: "Cafeteria".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date"),
        photo_url: None,
    }
}

/// IDs of `items`, in order.
pub fn ids(items: &[Arc<Item>]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}
