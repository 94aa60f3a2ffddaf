//! # Search Command
//!
//! Free-text search across title, description, category and location,
//! combined with structured filters.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::{
    app::App,
    item::search::{SearchFilters, StatusFilter, TypeFilter},
    ui::{self, OutputFormat},
};

/// Arguments for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: String,
    pub kind: Option<TypeFilter>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<StatusFilter>,
    pub format: OutputFormat,
}

impl SearchArgs {
    /// Builds the filter set for this search.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            kind: self.kind,
            category: self.category.clone(),
            location: self.location.clone(),
            status: self.status,
        }
    }
}

/// Executes the search command.
pub fn execute(app: &App, args: &SearchArgs) -> Result<()> {
    let filters = args.filters();
    let items = app.store.search_items(&args.query, &filters);

    let active = filters.active_count(&args.query);
    tracing::debug!(query = %args.query, active, hits = items.len(), "search");

    if args.format == OutputFormat::Table && active > 0 {
        let noun = if active == 1 { "filter" } else { "filters" };
        println!(
            "{}",
            format!("{active} active {noun}").if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }

    if items.is_empty() && args.format == OutputFormat::Table {
        println!("No items found. Try adjusting your search terms or filters.");
        return Ok(());
    }

    ui::print_items(&items, args.format)
}
