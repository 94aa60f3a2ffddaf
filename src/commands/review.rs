//! # Review Commands
//!
//! Admin review queue plus the approve and reject actions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::{
    app::App,
    item::{search::StatusFilter, Status},
    stats::ReviewStats,
    ui::{self, OutputFormat},
};

/// Arguments for the review command
#[derive(Debug, Clone)]
pub struct ReviewArgs {
    /// Matches title, description and reporter name
    pub query: String,
    pub status: StatusFilter,
    pub format: OutputFormat,
}

impl Default for ReviewArgs {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: StatusFilter::Pending,
            format: OutputFormat::Table,
        }
    }
}

fn heading(status: StatusFilter) -> &'static str {
    match status {
        StatusFilter::All => "All Items",
        StatusFilter::Pending => "Pending Review",
        StatusFilter::Verified => "Verified Items",
        StatusFilter::Claimed => "Claimed Items",
    }
}

/// Executes the review command.
pub fn execute(app: &App, args: &ReviewArgs) -> Result<()> {
    app.require_admin("review items")?;

    let items = app.store.review_queue(&args.query, args.status);

    if args.format != OutputFormat::Table {
        return ui::print_items(&items, args.format);
    }

    let stats = ReviewStats::compute(app.store.list_items());
    println!(
        "pending {}  verified {}  claimed {}",
        stats.pending, stats.verified, stats.claimed
    );
    println!();
    println!(
        "{}",
        heading(args.status).if_supports_color(Stream::Stdout, |t| t.bold())
    );

    if items.is_empty() {
        if args.status == StatusFilter::Pending && args.query.is_empty() {
            println!("All caught up! No items pending review.");
        } else {
            println!("No items found. Try adjusting your search or filter criteria.");
        }
        return Ok(());
    }

    ui::print_items(&items, args.format)
}

/// Executes the approve command.
pub async fn execute_approve(app: &mut App, id: &str) -> Result<()> {
    app.require_admin("approve items")?;
    let item = app.store.approve(id).await?;
    ui::print_success(&format!("Approved item {}: {}", item.id, item.title));
    Ok(())
}

/// Executes the reject command.
pub async fn execute_reject(app: &mut App, id: &str) -> Result<()> {
    app.require_admin("reject items")?;
    let item = app.store.reject(id).await?;
    ui::print_warning(&format!(
        "Rejected item {} is kept as {}; rejections are not stored",
        item.id, item.status
    ));
    Ok(())
}

/// Executes the set-status command: any target status, no lifecycle checks.
pub async fn execute_set_status(app: &mut App, id: &str, status: Status) -> Result<()> {
    app.require_admin("set item status")?;
    let item = app.store.update_item_status(id, status).await?;
    ui::print_success(&format!("Item {} is now {}", item.id, item.status));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        store::{ItemStore, Latency},
    };

    fn app(email: &str) -> App {
        let store = ItemStore::seeded(Latency::none());
        let user = store.find_user_by_email(email).cloned();
        App::new(Config::default(), store, user)
    }

    #[test]
    fn test_review_requires_admin() {
        let app = app("john.doe@university.edu");
        let err = execute(&app, &ReviewArgs::default()).unwrap_err();
        assert_eq!(err.to_string(), "Only administrators can review items");
    }

    #[tokio::test]
    async fn test_approve_as_admin() {
        let mut app = app("admin@university.edu");
        execute_approve(&mut app, "4").await.unwrap();
        assert_eq!(app.store.get("4").unwrap().status, Status::Verified);
        assert!(app.store.review_queue("", StatusFilter::Pending).is_empty());
    }

    #[tokio::test]
    async fn test_approve_as_user_changes_nothing() {
        let mut app = app("john.doe@university.edu");
        assert!(execute_approve(&mut app, "4").await.is_err());
        assert_eq!(app.store.get("4").unwrap().status, Status::Pending);
    }

    #[tokio::test]
    async fn test_set_status_skips_lifecycle() {
        let mut app = app("admin@university.edu");
        execute_set_status(&mut app, "1", Status::Pending).await.unwrap();
        assert_eq!(app.store.get("1").unwrap().status, Status::Pending);
    }

    #[tokio::test]
    async fn test_reject_unknown_item() {
        let mut app = app("admin@university.edu");
        let err = execute_reject(&mut app, "missing").await.unwrap_err();
        assert_eq!(err.to_string(), "No item found with ID 'missing'");
    }
}
