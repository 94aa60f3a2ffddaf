//! # Show Command
//!
//! Prints the detail view of one report.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    app::App,
    item::lifecycle::{self, Action},
    store::StoreError,
    ui::{self, OutputFormat},
};

/// Executes the show command.
pub fn execute(app: &App, id: &str, format: OutputFormat) -> Result<()> {
    let item = app
        .store
        .get(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

    match format {
        OutputFormat::Table => {
            ui::print_item_details(item);
            if lifecycle::is_available(item, Action::Claim) {
                println!();
                println!("This item can be claimed: lf claim --id {}", item.id);
            }
        }
        OutputFormat::Ids => println!("{}", item.id),
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&**item).context("Failed to serialize item")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
