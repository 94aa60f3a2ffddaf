//! # List Command
//!
//! Lists reports newest first, optionally narrowed by type, status or
//! reporter.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Arc;

use anyhow::Result;

use crate::{
    app::App,
    item::{
        search::{SearchFilters, StatusFilter, TypeFilter},
        Item,
    },
    ui::{self, OutputFormat},
};

/// Arguments for the list command
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub kind: TypeFilter,
    pub status: StatusFilter,
    /// Only the signed-in user's reports
    pub mine: bool,
    pub format: OutputFormat,
}

/// Collects the items the list command shows.
pub fn collect(app: &App, args: &ListArgs) -> Result<Vec<Arc<Item>>> {
    let filters = SearchFilters::new().kind(args.kind).status(args.status);
    let mut items = app.store.search_items("", &filters);

    if args.mine {
        let user = app.require_user()?;
        items.retain(|item| item.user_id == user.id);
    }

    Ok(items)
}

/// Executes the list command.
pub fn execute(app: &App, args: &ListArgs) -> Result<()> {
    let items = collect(app, args)?;
    ui::print_items(&items, args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        item::ItemKind,
        store::{ItemStore, Latency},
    };

    fn app(signed_in: Option<&str>) -> App {
        let store = ItemStore::seeded(Latency::none());
        let user = signed_in.and_then(|email| store.find_user_by_email(email).cloned());
        App::new(Config::default(), store, user)
    }

    #[test]
    fn test_list_everything_newest_first() {
        let items = collect(&app(None), &ListArgs::default()).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_list_found_only() {
        let args = ListArgs {
            kind: TypeFilter::Found,
            ..ListArgs::default()
        };
        let items = collect(&app(None), &args).unwrap();
        assert!(items.iter().all(|i| i.kind == ItemKind::Found));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_list_mine_requires_login() {
        let args = ListArgs {
            mine: true,
            ..ListArgs::default()
        };
        assert!(collect(&app(None), &args).is_err());

        let items = collect(&app(Some("jane.smith@university.edu")), &args).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Blue Water Bottle");
    }
}
