//! # Claim Command
//!
//! Marks a verified found item as returned to its owner.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{app::App, ui};

/// Executes the claim command.
pub async fn execute(app: &mut App, id: &str) -> Result<()> {
    let claimant = app.require_user()?.id.clone();
    let item = app.store.claim(id).await?;
    tracing::info!(id = %item.id, %claimant, "item claimed");
    ui::print_success(&format!("Claimed item {}: {}", item.id, item.title));
    Ok(())
}
