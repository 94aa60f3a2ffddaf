//! # User
//!
//! Campus community member identity and display profile.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role. Fixed at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{other}' (expected user or admin)")),
        }
    }
}

/// A community member.
///
/// Email uniqueness is assumed by the store, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique ID
    pub id: String,

    /// Login email
    pub email: String,

    /// Display name
    pub name: String,

    /// Role
    #[serde(default)]
    pub role: Role,

    /// Avatar image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Account creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns true for administrators.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Derives a display name from the local part of an email address.
///
/// Dots become spaces and each word starts with an uppercase letter:
/// `jane.smith@university.edu` becomes `Jane Smith`.
///
/// # Example
/// ```
/// use lostfound::user::display_name_from_email;
/// assert_eq!(display_name_from_email("jane.smith@university.edu"), "Jane Smith");
/// ```
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let spaced = local.replace('.', " ");

    let mut name = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if at_word_start && c.is_alphanumeric() {
            name.extend(c.to_uppercase());
        } else {
            name.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    name
}
