//! # Statistics
//!
//! Counters shown on the dashboard, the profile page and the admin review page.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, hash::Hash, sync::Arc};

use chrono::{DateTime, Duration, Utc};

use crate::{
    constants::RECENT_WINDOW_DAYS,
    item::{Item, ItemKind, Status},
};

/// Counts occurrences by a key extracted from each item.
pub fn count_by<T, K, F>(items: &[T], key_fn: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }
    counts
}

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub found: usize,
    /// Reported within the last seven days
    pub this_week: usize,
}

impl DashboardStats {
    pub fn compute(items: &[Arc<Item>], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(RECENT_WINDOW_DAYS);
        Self {
            total: items.len(),
            found: items.iter().filter(|i| i.kind == ItemKind::Found).count(),
            this_week: items.iter().filter(|i| i.created_at > week_ago).count(),
        }
    }
}

/// Counters for one user's own reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStats {
    pub reported: usize,
    pub lost: usize,
    pub found: usize,
    pub claimed: usize,
}

impl ProfileStats {
    /// `items` should already be narrowed to the user's reports.
    pub fn compute(items: &[Arc<Item>]) -> Self {
        let kinds = count_by(items, |i| i.kind);
        Self {
            reported: items.len(),
            lost: kinds.get(&ItemKind::Lost).copied().unwrap_or(0),
            found: kinds.get(&ItemKind::Found).copied().unwrap_or(0),
            claimed: items.iter().filter(|i| i.status == Status::Claimed).count(),
        }
    }
}

/// Review page counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStats {
    pub pending: usize,
    pub verified: usize,
    pub claimed: usize,
}

impl ReviewStats {
    pub fn compute(items: &[Arc<Item>]) -> Self {
        let statuses = count_by(items, |i| i.status);
        let get = |s| statuses.get(&s).copied().unwrap_or(0);
        Self {
            pending: get(Status::Pending),
            verified: get(Status::Verified),
            claimed: get(Status::Claimed),
        }
    }
}
