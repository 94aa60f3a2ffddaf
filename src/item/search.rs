//! # Search and Filter
//!
//! Narrows an item sequence by a free-text query and structured criteria.
//! This module is the single source of truth for item filtering, used by the
//! search, list and review commands alike.
//!
//! All criteria are ANDed. Output keeps the input order; ordering is a property
//! of the store, not of the filter.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr, sync::Arc};

use super::{Item, ItemKind, Status};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Item type criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TypeFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl TypeFilter {
    /// Returns true if `kind` passes this criterion.
    pub fn matches(self, kind: ItemKind) -> bool {
        match self {
            Self::All => true,
            Self::Lost => kind == ItemKind::Lost,
            Self::Found => kind == ItemKind::Found,
        }
    }
}

impl From<ItemKind> for TypeFilter {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Lost => Self::Lost,
            ItemKind::Found => Self::Found,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Lost => write!(f, "lost"),
            Self::Found => write!(f, "found"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse::<ItemKind>().map(Self::from),
        }
    }
}

/// Status criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Verified,
    Claimed,
}

impl StatusFilter {
    /// Returns true if `status` passes this criterion.
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == Status::Pending,
            Self::Verified => status == Status::Verified,
            Self::Claimed => status == Status::Claimed,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => Self::Pending,
            Status::Verified => Self::Verified,
            Status::Claimed => Self::Claimed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Verified => write!(f, "verified"),
            Self::Claimed => write!(f, "claimed"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse::<Status>().map(Self::from),
        }
    }
}

/// Structured search criteria.
///
/// Rebuilt for every search; `None`, empty strings and `All` match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Item type (exact)
    pub kind: Option<TypeFilter>,
    /// Category (exact, case-sensitive)
    pub category: Option<String>,
    /// Location (substring, case-insensitive)
    pub location: Option<String>,
    /// Status (exact)
    pub status: Option<StatusFilter>,
}

impl SearchFilters {
    /// Creates empty filters (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one item type.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<TypeFilter>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Restricts to one category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts to locations containing `location`.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub fn status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns true if no structured criterion is active.
    pub fn is_empty(&self) -> bool {
        self.active_count("") == 0
    }

    /// Counts active criteria, plus one for a non-empty query.
    ///
    /// Drives the badge on the search screen's filter toggle.
    pub fn active_count(&self, query: &str) -> usize {
        let flags = [
            self.kind.is_some_and(|k| k != TypeFilter::All),
            self.category.as_deref().is_some_and(|c| !c.is_empty()),
            self.location.as_deref().is_some_and(|l| !l.is_empty()),
            self.status.is_some_and(|s| s != StatusFilter::All),
            !query.is_empty(),
        ];
        flags.into_iter().filter(|active| *active).count()
    }
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks if an item matches the query and every criterion.
pub fn matches_filter(item: &Item, query: &str, filters: &SearchFilters) -> bool {
    // Empty query skips text matching entirely
    if !query.is_empty() && !matches_query_text(item, query) {
        return false;
    }

    if let Some(kind) = filters.kind {
        if !matches_type(item, kind) {
            return false;
        }
    }

    if let Some(ref category) = filters.category {
        if !matches_category(item, category) {
            return false;
        }
    }

    if let Some(ref location) = filters.location {
        if !matches_location(item, location) {
            return false;
        }
    }

    if let Some(status) = filters.status {
        if !matches_status(item, status) {
            return false;
        }
    }

    true
}

/// Returns the items matching `query` and `filters`, in input order.
pub fn filter_items(items: &[Arc<Item>], query: &str, filters: &SearchFilters) -> Vec<Arc<Item>> {
    items
        .iter()
        .filter(|item| matches_filter(item, query, filters))
        .cloned()
        .collect()
}

// =============================================================================
// Individual Filter Predicates
// =============================================================================

/// Case-insensitive substring test.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Checks title, description, category and location for the query
/// (case-insensitive substring).
pub fn matches_query_text(item: &Item, query: &str) -> bool {
    let query = query.to_lowercase();

    [
        &item.title,
        &item.description,
        &item.category,
        &item.location,
    ]
    .into_iter()
    .any(|field| contains_ignore_case(field, &query))
}

/// Checks the item type.
pub fn matches_type(item: &Item, filter: TypeFilter) -> bool {
    filter.matches(item.kind)
}

/// Checks the category by exact string equality. Empty matches everything.
pub fn matches_category(item: &Item, category: &str) -> bool {
    category.is_empty() || item.category == category
}

/// Checks that the location contains the filter (case-insensitive).
/// Empty matches everything.
pub fn matches_location(item: &Item, location: &str) -> bool {
    location.is_empty() || contains_ignore_case(&item.location, &location.to_lowercase())
}

/// Checks the status.
pub fn matches_status(item: &Item, filter: StatusFilter) -> bool {
    filter.matches(item.status)
}

// =============================================================================
// Review Queue Matching (admin)
// =============================================================================

/// Admin review query: title, description or the reporter's display name
/// (case-insensitive substring). Category and location are not searched.
pub fn matches_review_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    [&item.title, &item.description, &item.user.name]
        .into_iter()
        .any(|field| contains_ignore_case(field, &query))
}

/// Returns the review queue: items matching the admin query and status.
pub fn filter_review_queue(
    items: &[Arc<Item>],
    query: &str,
    status: StatusFilter,
) -> Vec<Arc<Item>> {
    items
        .iter()
        .filter(|item| matches_review_query(item, query) && status.matches(item.status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::item::tests::sample_user;

    fn item(id: &str, kind: ItemKind, category: &str, location: &str, status: Status) -> Arc<Item> {
        let now = Utc::now();
        Arc::new(Item {
            id: id.to_string(),
            kind,
            title: format!("Item {id}"),
            description: String::new(),
            category: category.to_string(),
            location: location.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            photo_url: None,
            status,
            user_id: "1".to_string(),
            user: sample_user(),
            created_at: now,
            updated_at: now,
        })
    }

    fn scenario() -> Vec<Arc<Item>> {
        vec![
            item(
                "A",
                ItemKind::Lost,
                "Electronics",
                "Library",
                Status::Pending,
            ),
            item("B", ItemKind::Found, "Books", "Gym", Status::Verified),
        ]
    }

    fn ids(items: &[Arc<Item>]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_type_filter() {
        let items = scenario();
        let found = filter_items(&items, "", &SearchFilters::new().kind(ItemKind::Lost));
        assert_eq!(ids(&found), ["A"]);
    }

    #[test]
    fn test_status_filter() {
        let items = scenario();
        let found = filter_items(&items, "", &SearchFilters::new().status(Status::Verified));
        assert_eq!(ids(&found), ["B"]);
    }

    #[test]
    fn test_query_matches_location() {
        let items = scenario();
        let found = filter_items(&items, "gym", &SearchFilters::new());
        assert_eq!(ids(&found), ["B"]);
    }

    #[test]
    fn test_query_matches_category() {
        let items = scenario();
        let found = filter_items(&items, "ELECTRO", &SearchFilters::new());
        assert_eq!(ids(&found), ["A"]);
    }

    #[test]
    fn test_all_filters_return_everything() {
        let items = scenario();
        let filters = SearchFilters {
            kind: Some(TypeFilter::All),
            category: Some(String::new()),
            location: Some(String::new()),
            status: Some(StatusFilter::All),
        };
        let found = filter_items(&items, "", &filters);
        assert_eq!(ids(&found), ["A", "B"]);
        assert!(found.iter().zip(&items).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_category_is_exact() {
        let items = scenario();
        for category in ["electronic", "electronics"] {
            let filters = SearchFilters::new().category(category);
            assert!(filter_items(&items, "", &filters).is_empty());
        }
        let filters = SearchFilters::new().category("Electronics");
        assert_eq!(ids(&filter_items(&items, "", &filters)), ["A"]);
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let items = vec![item(
            "C",
            ItemKind::Lost,
            "Books",
            "Central Library",
            Status::Verified,
        )];
        let found = filter_items(&items, "", &SearchFilters::new().location("library"));
        assert_eq!(ids(&found), ["C"]);
    }

    #[test]
    fn test_criteria_are_anded() {
        let items = scenario();
        let filters = SearchFilters::new().kind(ItemKind::Lost).status(Status::Verified);
        assert!(filter_items(&items, "", &filters).is_empty());
    }

    #[test]
    fn test_query_is_idempotent() {
        let items = scenario();
        let once = filter_items(&items, "item", &SearchFilters::new());
        let twice = filter_items(&once, "item", &SearchFilters::new());
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_order_is_preserved() {
        let items = vec![
            item("Z", ItemKind::Lost, "Other", "Gym", Status::Pending),
            item("A", ItemKind::Lost, "Other", "Gym", Status::Pending),
            item("M", ItemKind::Lost, "Other", "Gym", Status::Pending),
        ];
        let found = filter_items(&items, "gym", &SearchFilters::new());
        assert_eq!(ids(&found), ["Z", "A", "M"]);
    }

    #[test]
    fn test_review_query_searches_reporter_not_location() {
        let items = scenario();
        assert_eq!(
            ids(&filter_review_queue(&items, "john", StatusFilter::All)),
            ["A", "B"]
        );
        assert!(filter_review_queue(&items, "gym", StatusFilter::All).is_empty());
        assert_eq!(
            ids(&filter_review_queue(&items, "", StatusFilter::Pending)),
            ["A"]
        );
    }

    #[test]
    fn test_active_count() {
        assert_eq!(SearchFilters::new().active_count(""), 0);
        let filters = SearchFilters {
            kind: Some(TypeFilter::All),
            category: Some("Books".to_string()),
            location: Some(String::new()),
            status: Some(StatusFilter::Claimed),
        };
        assert_eq!(filters.active_count(""), 2);
        assert_eq!(filters.active_count("wallet"), 3);
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!("found".parse::<TypeFilter>().unwrap(), TypeFilter::Found);
        assert_eq!(
            "verified".parse::<StatusFilter>().unwrap(),
            StatusFilter::Verified
        );
        assert!("rejected".parse::<StatusFilter>().is_err());
    }
}
