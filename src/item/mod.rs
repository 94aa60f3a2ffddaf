//! # Item
//!
//! A single lost-or-found report and the draft it is created from.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod lifecycle;
pub mod search;

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::user::User;

/// Whether an item was lost or found. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lost => write!(f, "lost"),
            Self::Found => write!(f, "found"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            other => Err(format!("unknown item type '{other}' (expected lost or found)")),
        }
    }
}

/// Item lifecycle stage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting admin review
    #[default]
    Pending,
    /// Reviewed and visible
    Verified,
    /// Matched to its owner
    Claimed,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Verified, Self::Claimed];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Verified => write!(f, "verified"),
            Self::Claimed => write!(f, "claimed"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "claimed" => Ok(Self::Claimed),
            other => Err(format!(
                "unknown status '{other}' (expected pending, verified or claimed)"
            )),
        }
    }
}

/// A lost or found report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique ID
    pub id: String,

    /// Lost or found
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Short title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Category label (usually one of the suggestions)
    pub category: String,

    /// Location label (usually one of the suggestions)
    pub location: String,

    /// Day the item was lost or found
    pub date: NaiveDate,

    /// Photo reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Lifecycle stage
    #[serde(default)]
    pub status: Status,

    /// Reporter's user ID
    pub user_id: String,

    /// Reporter profile as it was when the item was reported.
    /// Later profile changes do not reach existing items.
    pub user: User,

    /// Record creation timestamp (UTC)
    pub created_at: DateTime<Utc>,

    /// Last status change timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Builds a new pending item owned by `reporter`.
    pub fn from_draft(id: String, draft: ItemDraft, reporter: &User, now: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            date: draft.date,
            photo_url: draft.photo_url,
            status: Status::Pending,
            user_id: reporter.id.clone(),
            user: reporter.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with `status` replaced and `updated_at` advanced.
    ///
    /// `updated_at` always moves strictly forward, even when the clock has not
    /// ticked since the previous stamp.
    #[must_use]
    pub fn with_status(&self, status: Status, now: DateTime<Utc>) -> Self {
        let floor = self.updated_at.max(self.created_at) + Duration::microseconds(1);
        Self {
            status,
            updated_at: now.max(floor),
            ..self.clone()
        }
    }

    /// Returns true if the item was reported as found.
    pub fn is_found(&self) -> bool {
        self.kind == ItemKind::Found
    }
}

/// Field that failed draft validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("description is required")]
    MissingDescription,
    #[error("category is required")]
    MissingCategory,
    #[error("location is required")]
    MissingLocation,
}

/// Fields supplied by the report form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub photo_url: Option<String>,
}

impl ItemDraft {
    /// Checks that every required text field is non-blank.
    ///
    /// The store itself accepts any draft; callers validate at the boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (&self.title, ValidationError::MissingTitle),
            (&self.description, ValidationError::MissingDescription),
            (&self.category, ValidationError::MissingCategory),
            (&self.location, ValidationError::MissingLocation),
        ];
        for (value, err) in required {
            if value.trim().is_empty() {
                return Err(err);
            }
        }
        Ok(())
    }
}
