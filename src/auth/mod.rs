//! # Authentication
//!
//! Demo sign-in: any address under the configured campus domain is accepted
//! and no password is checked. This is a convenience gate, not security.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod session;

use chrono::Utc;
use thiserror::Error;

use crate::{
    config::Config,
    store::{simulate_latency, ItemStore},
    user::{display_name_from_email, Role, User},
};

/// Sign-in and permission failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please use your university email address")]
    InvalidDomain { email: String, domain: String },

    #[error("Not signed in. Run `lf login <email>` first.")]
    NotSignedIn,

    #[error("Only administrators can {0}")]
    Forbidden(&'static str),
}

/// Checks the email suffix against the accepted campus domain.
pub fn check_domain(email: &str, domain: &str) -> Result<(), AuthError> {
    if email.ends_with(domain) {
        Ok(())
    } else {
        Err(AuthError::InvalidDomain {
            email: email.to_string(),
            domain: domain.to_string(),
        })
    }
}

/// Signs in with `email` after the simulated login delay.
///
/// Known users are returned as stored. A first-time address becomes a new
/// `user`-role account named after its local part and is registered with the
/// store. The password is ignored.
pub async fn login(
    store: &mut ItemStore,
    config: &Config,
    email: &str,
    _password: &str,
) -> Result<User, AuthError> {
    simulate_latency(store.latency().mutation).await;

    check_domain(email, &config.email_domain).inspect_err(|_| {
        tracing::info!(%email, domain = %config.email_domain, "login rejected");
    })?;

    if let Some(user) = store.find_user_by_email(email) {
        tracing::info!(id = %user.id, "known user signed in");
        return Ok(user.clone());
    }

    let now = Utc::now();
    let user = User {
        id: store.fresh_user_id(now),
        email: email.to_string(),
        name: display_name_from_email(email),
        role: Role::User,
        avatar: None,
        created_at: now,
    };
    let user = store.register_user(user);
    tracing::info!(id = %user.id, "new user signed in");
    Ok(user)
}

/// Requires a signed-in user.
pub fn require_user(user: Option<&User>) -> Result<&User, AuthError> {
    user.ok_or(AuthError::NotSignedIn)
}

/// Requires a signed-in administrator; `action` names what was attempted.
pub fn require_admin<'a>(
    user: Option<&'a User>,
    action: &'static str,
) -> Result<&'a User, AuthError> {
    let user = require_user(user)?;
    if user.is_admin() {
        Ok(user)
    } else {
        Err(AuthError::Forbidden(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Latency;

    fn config() -> Config {
        Config {
            latency_ms: 0,
            initial_load_ms: 0,
            ..Config::default()
        }
    }

    #[test]
    fn test_domain_check() {
        assert!(check_domain("a.b@university.edu", "@university.edu").is_ok());
        let err = check_domain("a.b@gmail.com", "@university.edu").unwrap_err();
        assert_eq!(err.to_string(), "Please use your university email address");
    }

    #[test]
    fn test_domain_check_is_suffix_only() {
        assert!(check_domain("x@university.edu.evil.com", "@university.edu").is_err());
        assert!(check_domain("@university.edu", "@university.edu").is_ok());
    }

    #[tokio::test]
    async fn test_login_known_user() {
        let mut store = ItemStore::seeded(Latency::none());
        let user = login(&mut store, &config(), "admin@university.edu", "x")
            .await
            .unwrap();
        assert_eq!(user.id, "4");
        assert!(user.is_admin());
        assert_eq!(store.users().len(), 4);
    }

    #[tokio::test]
    async fn test_login_new_user_is_registered() {
        let mut store = ItemStore::seeded(Latency::none());
        let user = login(&mut store, &config(), "sam.lee@university.edu", "")
            .await
            .unwrap();
        assert_eq!(user.name, "Sam Lee");
        assert_eq!(user.role, Role::User);
        assert_eq!(
            store.find_user_by_email("sam.lee@university.edu"),
            Some(&user)
        );
    }

    #[tokio::test]
    async fn test_new_user_ids_are_unique() {
        let config = Config {
            id_pattern: "%y%m%d".to_string(),
            ..config()
        };
        let mut store = ItemStore::load(&config).await;

        let sam = login(&mut store, &config, "sam.lee@university.edu", "")
            .await
            .unwrap();
        let kim = login(&mut store, &config, "kim.park@university.edu", "")
            .await
            .unwrap();

        assert_ne!(sam.id, kim.id);
        assert_eq!(store.users().len(), 6);
        assert_eq!(
            store.find_user_by_email("john.doe@university.edu").unwrap().id,
            "1"
        );
    }

    #[tokio::test]
    async fn test_login_wrong_domain() {
        let mut store = ItemStore::seeded(Latency::none());
        let result = login(&mut store, &config(), "sam@example.com", "").await;
        assert!(matches!(result, Err(AuthError::InvalidDomain { .. })));
        assert_eq!(store.users().len(), 4);
    }

    #[test]
    fn test_require_admin() {
        let store = ItemStore::seeded(Latency::none());
        let john = store.find_user_by_email("john.doe@university.edu");
        let admin = store.find_user_by_email("admin@university.edu");

        assert_eq!(require_admin(None, "approve items"), Err(AuthError::NotSignedIn));
        assert_eq!(
            require_admin(john, "approve items"),
            Err(AuthError::Forbidden("approve items"))
        );
        assert!(require_admin(admin, "approve items").is_ok());
    }
}
