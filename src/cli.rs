//! # Command Line
//!
//! The clap command tree shared by the `lf` binary and the interactive shell,
//! and the dispatcher that maps parsed commands onto [`crate::commands`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    app::App,
    commands::{
        self, AdminArgs, ListArgs, NotificationArgs, ReportArgs, ReviewArgs, SearchArgs, StatsView,
    },
    item::{
        search::{StatusFilter, TypeFilter},
        ItemKind, Status,
    },
    settings::{PasswordChange, ProfileUpdate},
    ui::OutputFormat,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/lostfound/config     Settings (latency, email domain, ID pattern, log level)
  ~/.config/lostfound/user.toml  Signed-in user

Item Lifecycle:
  pending  -> verified           Admin approves a new report
  verified -> claimed            Owner picks up a found item

Getting Started:
  lf setup                                Write the config, install completions
  lf login john.doe@university.edu        Sign in (demo: password is not checked)
  lf search wallet --type lost            Search reports
  lf report --type found --title \"Umbrella\" --description \"Black\" \\
            --category Other --location Cafeteria
  lf shell                                Keep one session for many commands

Learn more:
  lf <COMMAND> --help            Show detailed help for a command";

#[derive(Debug, Parser)]
#[command(name = "lf")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Lost-and-found listings for a university community")]
#[command(
    long_about = "lf lists lost and found reports for a university campus. Anyone can browse \
and search the listings; signed-in members report items, and administrators review new \
reports before they are verified.\n\n\
Reports live in memory for one session, seeded with demo data. Use `lf shell` to keep \
changes across several commands."
)]
#[command(after_help = GLOBAL_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the default config and install shell completions
    #[command(
        long_about = "One-time setup.\n\n\
Writes a commented config file to ~/.config/lostfound/config (an existing file is kept) \
and installs a completion script for your shell, detected from $SHELL.",
        after_help = "Examples:\n  \
lf setup                        Detect shell from $SHELL\n  \
lf setup --shell fish           Install fish completions\n  \
lf setup --no-completions       Only write the config"
    )]
    Setup {
        /// Shell to install completions for
        #[arg(long, value_enum)]
        shell: Option<Shell>,

        /// Skip installing completions
        #[arg(long)]
        no_completions: bool,
    },

    /// List reports, newest first
    #[command(after_help = "Examples:\n  \
lf list                         All reports\n  \
lf list --type found            Found items only\n  \
lf list --status verified       Verified reports\n  \
lf list --mine --format ids     IDs of your own reports")]
    List {
        /// Item type
        #[arg(long = "type", value_enum, default_value = "all")]
        kind: TypeFilter,

        /// Item status
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,

        /// Only your own reports
        #[arg(long)]
        mine: bool,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Search reports by text and filters
    #[command(
        long_about = "Search reports.\n\n\
The query matches title, description, category and location, case-insensitively. \
Filters narrow the result further; all criteria must hold. Category must match exactly, \
location matches any part of the location name.",
        after_help = "Examples:\n  \
lf search wallet\n  \
lf search blue --type found\n  \
lf search --category Electronics --location library\n  \
lf search --status pending --format yaml"
    )]
    Search {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,

        /// Item type
        #[arg(long = "type", value_enum)]
        kind: Option<TypeFilter>,

        /// Exact category
        #[arg(long)]
        category: Option<String>,

        /// Part of the location name
        #[arg(long)]
        location: Option<String>,

        /// Item status
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one report in full
    Show {
        /// Item ID
        #[arg(long, required = true)]
        id: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Report a lost or found item
    #[command(
        long_about = "Report a lost or found item.\n\n\
Requires sign-in. New reports start as pending and appear in the admin review queue. \
Run `lf categories` and `lf locations` for the usual values; others are accepted.",
        after_help = "Examples:\n  \
lf report --type lost --title \"Black Wallet\" --description \"Leather, has my ID\" \\\n    \
--category \"Personal Items\" --location \"Student Union\" --date 2024-01-15"
    )]
    Report {
        /// Lost or found
        #[arg(long = "type", value_enum)]
        kind: ItemKind,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        location: String,

        /// When it was lost or found (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Link to a photo
        #[arg(long)]
        photo_url: Option<String>,
    },

    /// Admin review queue
    #[command(
        long_about = "Show the admin review queue.\n\n\
Requires an administrator. The query matches title, description and the reporter's name. \
Shows pending reports unless --status says otherwise.",
        after_help = "Examples:\n  \
lf review                       Pending reports\n  \
lf review jane --status all     Everything Jane reported"
    )]
    Review {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,

        #[arg(long, value_enum, default_value = "pending")]
        status: StatusFilter,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Approve a pending report (admin)
    Approve {
        #[arg(long, required = true)]
        id: String,
    },

    /// Reject a pending report (admin)
    #[command(long_about = "Reject a pending report.\n\n\
There is no rejected status and reports are never deleted, so the report stays pending.")]
    Reject {
        #[arg(long, required = true)]
        id: String,
    },

    /// Mark a verified found item as returned to its owner
    Claim {
        #[arg(long, required = true)]
        id: String,
    },

    /// Set a report's status directly, skipping lifecycle checks (admin)
    SetStatus {
        #[arg(long, required = true)]
        id: String,

        #[arg(value_enum)]
        status: Status,
    },

    /// Show dashboard, profile or review counters
    Stats {
        /// Your own reports
        #[arg(long, conflicts_with = "admin")]
        profile: bool,

        /// Review counters (admin)
        #[arg(long)]
        admin: bool,
    },

    /// Sign in with a campus email
    #[command(
        long_about = "Sign in with a campus email address.\n\n\
The address must end with the configured domain (default @university.edu). \
The password is not checked. A first-time address creates a new account.",
        after_help = "Examples:\n  \
lf login admin@university.edu\n  \
lf login sam.lee@university.edu --password hunter2"
    )]
    Login {
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Profile, password, notification and admin settings
    #[command(
        long_about = "Change your settings.\n\n\
Profile edits are saved to the signed-in user; reports you already filed keep the name they \
were filed under. Passwords are not checked or stored. Notification and admin settings last \
until the process exits, so use `lf shell` to keep them across commands.",
        after_help = "Examples:\n  \
lf settings profile --name \"Jane S.\"\n  \
lf settings password --current old --new s3cret --confirm s3cret\n  \
lf settings notifications --sms true\n  \
lf settings admin --require-photos false"
    )]
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show the signed-in user
    Whoami,

    /// List categories with report counts
    Categories,

    /// List locations with report counts
    Locations,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
lf completions zsh > ~/.zfunc/_lf\n  \
lf completions fish > ~/.config/fish/completions/lf.fish")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Start an interactive session
    Shell,
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Change your display name or avatar (shows the profile without flags)
    Profile {
        #[arg(long)]
        name: Option<String>,

        /// Avatar image URL; an empty value removes it
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Change your password
    Password {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        /// Must match --new
        #[arg(long)]
        confirm: String,
    },

    /// Notification preferences (shows them without flags)
    Notifications {
        /// Email when a potential match for your items appears
        #[arg(long)]
        email_matches: Option<bool>,

        /// Email when someone claims an item you found
        #[arg(long)]
        email_claims: Option<bool>,

        /// Email about new features and maintenance
        #[arg(long)]
        email_updates: Option<bool>,

        #[arg(long)]
        push: Option<bool>,

        #[arg(long)]
        sms: Option<bool>,
    },

    /// Moderation settings (admin; shows them without flags)
    Admin {
        /// Approve new reports without review
        #[arg(long)]
        auto_approval: Option<bool>,

        /// Require a photo on every report
        #[arg(long)]
        require_photos: Option<bool>,

        /// Maximum number of active items per user
        #[arg(long)]
        max_items_per_user: Option<u32>,

        /// Days after which unclaimed items expire
        #[arg(long)]
        item_expiry_days: Option<u32>,
    },
}

impl Commands {
    const fn stats_view(profile: bool, admin: bool) -> StatsView {
        if admin {
            StatsView::Admin
        } else if profile {
            StatsView::Profile
        } else {
            StatsView::Dashboard
        }
    }
}

/// Runs a top-level command.
pub async fn run(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Shell => commands::shell(app).await,
        other => execute_command(app, other).await,
    }
}

/// Runs any command except `shell`.
pub async fn execute_command(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Setup {
            shell,
            no_completions,
        } => commands::setup(shell, no_completions),

        Commands::List {
            kind,
            status,
            mine,
            format,
        } => commands::list(
            app,
            &ListArgs {
                kind,
                status,
                mine,
                format,
            },
        ),

        Commands::Search {
            query,
            kind,
            category,
            location,
            status,
            format,
        } => commands::search(
            app,
            &SearchArgs {
                query,
                kind,
                category,
                location,
                status,
                format,
            },
        ),

        Commands::Show { id, format } => commands::show(app, &id, format),

        Commands::Report {
            kind,
            title,
            description,
            category,
            location,
            date,
            photo_url,
        } => {
            commands::report(
                app,
                ReportArgs {
                    kind,
                    title,
                    description,
                    category,
                    location,
                    date,
                    photo_url,
                },
            )
            .await
        }

        Commands::Review {
            query,
            status,
            format,
        } => commands::review(
            app,
            &ReviewArgs {
                query,
                status,
                format,
            },
        ),

        Commands::Approve { id } => commands::approve(app, &id).await,
        Commands::Reject { id } => commands::reject(app, &id).await,
        Commands::Claim { id } => commands::claim(app, &id).await,
        Commands::SetStatus { id, status } => commands::set_status(app, &id, status).await,

        Commands::Stats { profile, admin } => {
            commands::stats(app, Commands::stats_view(profile, admin))
        }

        Commands::Login { email, password } => commands::login(app, &email, &password).await,
        Commands::Logout => commands::logout(app),
        Commands::Settings { action } => execute_settings(app, action).await,
        Commands::Whoami => commands::whoami(app),
        Commands::Categories => commands::categories(app),
        Commands::Locations => commands::locations(app),
        Commands::Completions { shell } => commands::completions(shell),

        Commands::Shell => bail!("Already in a shell"),
    }
}

async fn execute_settings(app: &mut App, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Profile { name, avatar } => {
            commands::settings_profile(app, ProfileUpdate { name, avatar }).await
        }

        SettingsAction::Password {
            current,
            new,
            confirm,
        } => {
            let change = PasswordChange {
                current,
                new,
                confirm,
            };
            commands::settings_password(app, change).await
        }

        SettingsAction::Notifications {
            email_matches,
            email_claims,
            email_updates,
            push,
            sms,
        } => {
            let args = NotificationArgs {
                email_matches,
                email_claims,
                email_updates,
                push,
                sms,
            };
            commands::settings_notifications(app, args).await
        }

        SettingsAction::Admin {
            auto_approval,
            require_photos,
            max_items_per_user,
            item_expiry_days,
        } => {
            let args = AdminArgs {
                auto_approval,
                require_photos,
                max_items_per_user,
                item_expiry_days,
            };
            commands::settings_admin(app, args).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags() {
        let line = "lf search blue --type found --location union";
        let cli = Cli::try_parse_from(line.split_whitespace()).unwrap();
        let Commands::Search {
            query,
            kind,
            location,
            category,
            ..
        } = cli.command
        else {
            panic!("expected search");
        };
        assert_eq!(query, "blue");
        assert_eq!(kind, Some(TypeFilter::Found));
        assert_eq!(location.as_deref(), Some("union"));
        assert_eq!(category, None);
    }

    #[test]
    fn test_review_defaults_to_pending() {
        let cli = Cli::try_parse_from(["lf", "review"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Review {
                status: StatusFilter::Pending,
                ..
            }
        ));
    }

    #[test]
    fn test_report_rejects_unknown_type() {
        let line = "lf report --type stolen --title t --description d --category c --location l";
        let err = Cli::try_parse_from(line.split_whitespace()).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_settings_notification_flags() {
        let line = "lf settings notifications --sms true --email-matches false";
        let cli = Cli::try_parse_from(line.split_whitespace()).unwrap();
        let Commands::Settings { action } = cli.command else {
            panic!("expected settings");
        };
        let SettingsAction::Notifications {
            email_matches,
            sms,
            push,
            ..
        } = action
        else {
            panic!("expected notifications");
        };
        assert_eq!(email_matches, Some(false));
        assert_eq!(sms, Some(true));
        assert_eq!(push, None);
    }

    #[test]
    fn test_stats_view() {
        assert_eq!(Commands::stats_view(false, false), StatsView::Dashboard);
        assert_eq!(Commands::stats_view(true, false), StatsView::Profile);
        assert_eq!(Commands::stats_view(false, true), StatsView::Admin);
    }
}
