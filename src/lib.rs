//! # lostfound
//!
//! Lost-and-found listings for a university community.
//!
//! Members report items they lost or found on campus; anyone can browse and
//! filter the listings; administrators review new reports before they are
//! verified, and verified found items can be claimed by their owners.
//!
//! ## Features
//!
//! - **Item Store**: In-memory reports, newest first, with simulated latency
//! - **Filter Engine**: Free-text query plus type, category, location and status
//! - **Review Queue**: Admin search over title, description and reporter name
//! - **Demo Auth**: Campus-domain email sign-in persisted between runs
//! - **Settings**: Profile edits, password changes and session preferences
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod app;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod id;
pub mod item;
pub mod logging;
pub mod settings;
pub mod stats;
pub mod store;
pub mod ui;
pub mod user;

pub use app::App;
pub use config::{set_home_override, Config};
pub use item::{
    search::{filter_items, SearchFilters, StatusFilter, TypeFilter},
    Item, ItemDraft, ItemKind, Status,
};
pub use store::{ItemStore, Latency, StoreError};
pub use user::{Role, User};
