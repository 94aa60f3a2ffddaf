//! # Report Command
//!
//! Files a new lost or found report for the signed-in user. The report starts
//! out pending until an administrator reviews it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use crate::{
    app::App,
    constants::{CATEGORY_SUGGESTIONS, LOCATION_SUGGESTIONS},
    item::{Item, ItemDraft, ItemKind},
    ui,
};

/// Arguments for the report command
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// Defaults to today (UTC)
    pub date: Option<NaiveDate>,
    pub photo_url: Option<String>,
}

impl ReportArgs {
    /// Converts the arguments into a validated draft.
    pub fn into_draft(self) -> Result<ItemDraft> {
        let draft = ItemDraft {
            kind: self.kind,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            location: self.location.trim().to_string(),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            photo_url: self.photo_url.filter(|p| !p.trim().is_empty()),
        };
        draft.validate().context("Invalid report")?;
        Ok(draft)
    }
}

/// Files the report and returns the stored item.
pub async fn submit(app: &mut App, args: ReportArgs) -> Result<Arc<Item>> {
    let reporter = app.require_user()?.clone();
    let draft = args.into_draft()?;

    if !CATEGORY_SUGGESTIONS.contains(&draft.category.as_str()) {
        ui::print_warning(&format!(
            "'{}' is not one of the usual categories",
            draft.category
        ));
    }
    if !LOCATION_SUGGESTIONS.contains(&draft.location.as_str()) {
        ui::print_warning(&format!(
            "'{}' is not one of the usual locations",
            draft.location
        ));
    }

    Ok(app.store.add_item(&reporter, draft).await)
}

/// Executes the report command.
pub async fn execute(app: &mut App, args: ReportArgs) -> Result<()> {
    let item = submit(app, args).await?;
    ui::print_success(&format!(
        "Reported {} item {}: {} (pending review)",
        item.kind, item.id, item.title
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        item::Status,
        store::{ItemStore, Latency},
    };

    fn args() -> ReportArgs {
        ReportArgs {
            kind: ItemKind::Found,
            title: "  Umbrella ".to_string(),
            description: "Black umbrella with a wooden handle".to_string(),
            category: "Personal Items".to_string(),
            location: "Cafeteria".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20),
            photo_url: Some(String::new()),
        }
    }

    fn signed_in_app() -> App {
        let store = ItemStore::seeded(Latency::none());
        let user = store
            .find_user_by_email("jane.smith@university.edu")
            .cloned();
        App::new(Config::default(), store, user)
    }

    #[test]
    fn test_into_draft_trims_and_drops_empty_photo() {
        let draft = args().into_draft().unwrap();
        assert_eq!(draft.title, "Umbrella");
        assert_eq!(draft.photo_url, None);
    }

    #[test]
    fn test_into_draft_rejects_blank_description() {
        let mut a = args();
        a.description = " ".to_string();
        let err = a.into_draft().unwrap_err();
        assert!(format!("{err:#}").contains("description is required"));
    }

    #[tokio::test]
    async fn test_submit_prepends_pending_item() {
        let mut app = signed_in_app();
        let item = submit(&mut app, args()).await.unwrap();

        assert_eq!(item.status, Status::Pending);
        assert_eq!(item.user.name, "Jane Smith");
        assert_eq!(app.store.list_items()[0].id, item.id);
    }

    #[tokio::test]
    async fn test_submit_requires_login() {
        let mut app = App::new(Config::default(), ItemStore::seeded(Latency::none()), None);
        assert!(submit(&mut app, args()).await.is_err());
        assert_eq!(app.store.list_items().len(), 4);
    }
}
