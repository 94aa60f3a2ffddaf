//! # Catalog Commands
//!
//! `categories` and `locations`: the suggestion lists plus any values already
//! used by reports, with usage counts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::Result;

use crate::{
    app::App,
    constants::{CATEGORY_SUGGESTIONS, LOCATION_SUGGESTIONS},
    item::Item,
    stats::count_by,
};

/// Lists suggested values first, then values only seen in reports.
fn collect(
    suggestions: &[&str],
    items: &[Arc<Item>],
    key: fn(&Item) -> &str,
) -> Vec<(String, usize)> {
    let counts = count_by(items, |item| key(item).to_string());

    let mut rows: Vec<(String, usize)> = suggestions
        .iter()
        .map(|s| ((*s).to_string(), counts.get(*s).copied().unwrap_or(0)))
        .collect();

    let extra: BTreeMap<&String, usize> = counts
        .iter()
        .filter(|(name, _)| !suggestions.contains(&name.as_str()))
        .map(|(name, count)| (name, *count))
        .collect();
    rows.extend(extra.into_iter().map(|(name, count)| (name.clone(), count)));

    rows
}

fn print_rows(rows: &[(String, usize)]) {
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in rows {
        println!("{name:<width$}  {count}");
    }
}

/// Category names with report counts.
pub fn categories(app: &App) -> Vec<(String, usize)> {
    collect(CATEGORY_SUGGESTIONS, app.store.list_items(), |item| item.category.as_str())
}

/// Location names with report counts.
pub fn locations(app: &App) -> Vec<(String, usize)> {
    collect(LOCATION_SUGGESTIONS, app.store.list_items(), |item| item.location.as_str())
}

/// Executes the categories command.
pub fn execute_categories(app: &App) -> Result<()> {
    print_rows(&categories(app));
    Ok(())
}

/// Executes the locations command.
pub fn execute_locations(app: &App) -> Result<()> {
    print_rows(&locations(app));
    Ok(())
}
