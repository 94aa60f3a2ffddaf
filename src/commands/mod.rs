//! # Commands
//!
//! CLI command implementations for lostfound.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod catalog;
pub mod claim;
pub mod completions;
pub mod list;
pub mod report;
pub mod review;
pub mod search;
pub mod session;
pub mod settings;
pub mod setup;
pub mod shell;
pub mod show;
pub mod stats;

pub use self::{
    catalog::{execute_categories as categories, execute_locations as locations},
    claim::execute as claim,
    completions::execute as completions,
    list::{execute as list, ListArgs},
    report::{execute as report, ReportArgs},
    review::{
        execute as review, execute_approve as approve, execute_reject as reject,
        execute_set_status as set_status, ReviewArgs,
    },
    search::{execute as search, SearchArgs},
    session::{execute_login as login, execute_logout as logout, execute_whoami as whoami},
    settings::{
        execute_admin as settings_admin, execute_notifications as settings_notifications,
        execute_password as settings_password, execute_profile as settings_profile, AdminArgs,
        NotificationArgs,
    },
    setup::execute as setup,
    shell::execute as shell,
    show::execute as show,
    stats::{execute as stats, StatsView},
};
