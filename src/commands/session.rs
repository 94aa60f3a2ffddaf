//! # Session Commands
//!
//! `login`, `logout` and `whoami`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    app::App,
    auth::{self, session},
    ui,
};

/// Signs in and persists the session.
pub async fn execute_login(app: &mut App, email: &str, password: &str) -> Result<()> {
    let email = email.trim();
    let user = auth::login(&mut app.store, &app.config, email, password).await?;
    session::save(&user)?;

    ui::print_success(&format!("Signed in as {} <{}>", user.name, user.email));
    app.user = Some(user);
    Ok(())
}

/// Signs out and erases the persisted session.
pub fn execute_logout(app: &mut App) -> Result<()> {
    let was_signed_in = session::clear()?;
    app.user = None;

    if was_signed_in {
        ui::print_success("Signed out");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

/// Prints the signed-in user.
pub fn execute_whoami(app: &App) -> Result<()> {
    let user = app.require_user()?;
    ui::print_user(user);
    Ok(())
}
