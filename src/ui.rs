//! # UI Utilities
//!
//! Table formatting, detail views and message helpers shared by the commands.
//! Colors are only emitted when the stream is a terminal.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Arc;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    constants::{
        UI_COL_CATEGORY_WIDTH, UI_COL_ID_WIDTH, UI_COL_STATUS_WIDTH, UI_COL_TYPE_WIDTH,
        UI_LOCATION_TRUNCATE_LEN, UI_TITLE_TRUNCATE_LEN,
    },
    item::{Item, ItemKind, Status},
    user::User,
};

/// Item output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// One ID per line
    Ids,
    /// Full records as YAML
    Yaml,
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates to `max` display columns, adding an ellipsis if anything was cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-aligns `s` in a field `width` display columns wide.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Status shown as a colored word; padding is applied before coloring so
/// columns stay aligned.
fn status_badge(status: Status) -> String {
    let text = pad(&status.to_string(), UI_COL_STATUS_WIDTH);
    match status {
        Status::Pending => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        Status::Verified => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        Status::Claimed => text
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string(),
    }
}

fn kind_label(kind: ItemKind) -> String {
    let text = pad(&kind.to_string(), UI_COL_TYPE_WIDTH);
    match kind {
        ItemKind::Lost => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
        ItemKind::Found => text
            .if_supports_color(Stream::Stdout, |t| t.blue())
            .to_string(),
    }
}

// =============================================================================
// Item Rendering
// =============================================================================

/// Formats one table row: ID | Type | Status | Title | Category | Location
pub fn format_row(item: &Item) -> String {
    format!(
        "{}  {}  {}  {}  {}  {}",
        pad(&item.id, UI_COL_ID_WIDTH),
        kind_label(item.kind),
        status_badge(item.status),
        pad(
            &truncate(&item.title, UI_TITLE_TRUNCATE_LEN),
            UI_TITLE_TRUNCATE_LEN
        ),
        pad(
            &truncate(&item.category, UI_COL_CATEGORY_WIDTH),
            UI_COL_CATEGORY_WIDTH
        ),
        truncate(&item.location, UI_LOCATION_TRUNCATE_LEN),
    )
}

/// Prints items in the requested format, with a count line for tables.
pub fn print_items(items: &[Arc<Item>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Ids => {
            for item in items {
                println!("{}", item.id);
            }
        }
        OutputFormat::Yaml => {
            let records: Vec<&Item> = items.iter().map(Arc::as_ref).collect();
            let yaml = serde_yml::to_string(&records).context("Failed to serialize items")?;
            print!("{yaml}");
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!(
                    "{}",
                    "No items found.".if_supports_color(Stream::Stdout, |t| t.dimmed())
                );
                return Ok(());
            }
            let header = format!(
                "{}  {}  {}  {}  {}  {}",
                pad("ID", UI_COL_ID_WIDTH),
                pad("TYPE", UI_COL_TYPE_WIDTH),
                pad("STATUS", UI_COL_STATUS_WIDTH),
                pad("TITLE", UI_TITLE_TRUNCATE_LEN),
                pad("CATEGORY", UI_COL_CATEGORY_WIDTH),
                "LOCATION"
            );
            println!("{}", header.if_supports_color(Stream::Stdout, |t| t.bold()));
            for item in items {
                println!("{}", format_row(item));
            }
            println!("{}", count_line(items.len(), "found"));
        }
    }
    Ok(())
}

/// `1 item found` / `3 items found`
pub fn count_line(count: usize, suffix: &str) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} {noun} {suffix}")
}

/// Prints the full detail view of one item.
pub fn print_item_details(item: &Item) {
    println!("{}", item.title.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("  ID:          {}", item.id);
    println!("  Type:        {}", item.kind);
    println!("  Status:      {}", item.status);
    println!("  Category:    {}", item.category);
    println!("  Location:    {}", item.location);
    println!("  Date:        {}", item.date);
    if let Some(ref photo) = item.photo_url {
        println!("  Photo:       {photo}");
    }
    println!("  Reported by: {} <{}>", item.user.name, item.user.email);
    println!("  Reported at: {}", item.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated at:  {}", item.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", item.description);
}

/// Prints a user's profile line.
pub fn print_user(user: &User) {
    println!("{} <{}> ({})", user.name, user.email, user.role);
}

// =============================================================================
// Messages
// =============================================================================

/// Prints `✓ {message}` in green.
pub fn print_success(message: &str) {
    println!(
        "{} {message}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green())
    );
}

/// Prints warnings with a yellow prefix.
pub fn print_warning(message: &str) {
    eprintln!(
        "{} {message}",
        "warning:".if_supports_color(Stream::Stderr, |t| t.yellow())
    );
}
