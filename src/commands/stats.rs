//! # Stats Command
//!
//! Dashboard, profile and admin counters.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::Utc;
use owo_colors::{OwoColorize, Stream};

use crate::{
    app::App,
    stats::{DashboardStats, ProfileStats, ReviewStats},
    ui::{self, OutputFormat},
};

/// Number of the user's own reports shown on the dashboard.
const DASHBOARD_MY_ITEMS: usize = 3;

/// Which counters to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsView {
    #[default]
    Dashboard,
    Profile,
    Admin,
}

fn section(title: &str) {
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Executes the stats command.
pub fn execute(app: &App, view: StatsView) -> Result<()> {
    match view {
        StatsView::Dashboard => dashboard(app),
        StatsView::Profile => profile(app),
        StatsView::Admin => admin(app),
    }
}

fn dashboard(app: &App) -> Result<()> {
    let items = app.store.list_items();
    let stats = DashboardStats::compute(items, Utc::now());

    println!("Total items:  {}", stats.total);
    println!("Items found:  {}", stats.found);
    println!("This week:    {}", stats.this_week);

    section("Recent items");
    ui::print_items(app.store.recent(app.config.recent_limit), OutputFormat::Table)?;

    if let Some(ref user) = app.user {
        section("My recent reports");
        let mine = app.store.items_by_user(&user.id);
        let shown = &mine[..DASHBOARD_MY_ITEMS.min(mine.len())];
        ui::print_items(shown, OutputFormat::Table)?;
    }

    Ok(())
}

fn profile(app: &App) -> Result<()> {
    let user = app.require_user()?;
    let mine = app.store.items_by_user(&user.id);
    let stats = ProfileStats::compute(&mine);

    ui::print_user(user);
    println!("Member since: {}", user.created_at.format("%B %Y"));
    println!();
    println!("Items reported: {}", stats.reported);
    println!("Lost items:     {}", stats.lost);
    println!("Found items:    {}", stats.found);
    println!("Items claimed:  {}", stats.claimed);

    section("My items");
    ui::print_items(&mine, OutputFormat::Table)
}

fn admin(app: &App) -> Result<()> {
    app.require_admin("view review statistics")?;
    let stats = ReviewStats::compute(app.store.list_items());

    println!("Pending review: {}", stats.pending);
    println!("Verified:       {}", stats.verified);
    println!("Claimed:        {}", stats.claimed);
    Ok(())
}
