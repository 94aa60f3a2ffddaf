//! # Session Tests
//!
//! Sign-in rules and the persisted user record.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{demo_user, seeded_store, TestEnv};
use lostfound::{
    auth::{self, session, AuthError},
    App, Config, Role,
};

fn config() -> Config {
    Config {
        latency_ms: 0,
        initial_load_ms: 0,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_login_persists_and_app_restores_user() {
    let env = TestEnv::new();
    let mut store = seeded_store();

    let user = auth::login(&mut store, &config(), "sam.lee@university.edu", "pw")
        .await
        .expect("campus address is accepted");
    session::save(&user).expect("session saved");
    assert!(env.session_path().exists());

    // A later run starts from a fresh store but the same session record
    let app = App::start(config()).await;
    assert_eq!(app.user.as_ref(), Some(&user));
    assert_eq!(
        app.store.find_user_by_email("sam.lee@university.edu"),
        Some(&user)
    );
}

#[tokio::test]
async fn test_unreadable_session_starts_signed_out() {
    let env = TestEnv::new();
    let path = env.session_path();
    std::fs::create_dir_all(path.parent().expect("config dir")).expect("config dir");
    std::fs::write(&path, "not = [valid").expect("write session");

    let app = App::start(config()).await;

    assert_eq!(app.user, None);
    assert_eq!(app.store.users().len(), 4);
    assert!(session::clear().expect("a broken record can still be cleared"));
}

#[tokio::test]
async fn test_restored_session_replaces_stored_profile() {
    let _env = TestEnv::new();
    let mut john = demo_user(&seeded_store(), "john.doe@university.edu");
    john.name = "Johnny D".to_string();
    session::save(&john).expect("session saved");

    let app = App::start(config()).await;

    assert_eq!(app.user.as_ref(), Some(&john));
    assert_eq!(app.store.users().len(), 4);
    assert_eq!(
        app.store
            .find_user_by_email("john.doe@university.edu")
            .map(|user| user.name.as_str()),
        Some("Johnny D")
    );
}

#[tokio::test]
async fn test_logout_erases_record() {
    let env = TestEnv::new();
    let mut store = seeded_store();

    let user = auth::login(&mut store, &config(), "jane.smith@university.edu", "")
        .await
        .expect("known user");
    session::save(&user).expect("session saved");

    assert!(session::clear().expect("cleared"));
    assert!(!env.session_path().exists());
    assert!(!session::clear().expect("nothing to clear"));
    assert_eq!(session::load().expect("load"), None);
}

#[tokio::test]
async fn test_rejected_domain_is_not_persisted() {
    let env = TestEnv::new();
    let mut store = seeded_store();

    let err = auth::login(&mut store, &config(), "someone@gmail.com", "")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidDomain { .. }));
    assert!(!env.session_path().exists());
}

#[tokio::test]
async fn test_configured_domain() {
    let _env = TestEnv::new();
    let mut store = seeded_store();
    let config = Config {
        email_domain: "@college.example".to_string(),
        ..config()
    };

    assert!(auth::login(&mut store, &config, "john.doe@university.edu", "")
        .await
        .is_err());
    let user = auth::login(&mut store, &config, "pat.kim@college.example", "")
        .await
        .expect("configured domain");
    assert_eq!(user.name, "Pat Kim");
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn test_admin_gate() {
    let _env = TestEnv::new();
    let store = seeded_store();
    let admin = store.find_user_by_email("admin@university.edu").cloned();
    let john = store.find_user_by_email("john.doe@university.edu").cloned();

    let app = App::new(config(), store.clone(), john);
    assert_eq!(
        app.require_admin("approve items").unwrap_err(),
        AuthError::Forbidden("approve items")
    );

    let app = App::new(config(), store, admin);
    assert!(app.require_admin("approve items").is_ok());
}
