use std::sync::Arc;

use anyhow::Result;
use entity::SessionUser;
use platform_api::Notifier;
use platform_authn::{AuthnError, FileSessionStore, IdentityStore, SessionStore};
use server::build_app;
use suite_tests::test_config;

#[tokio::test]
async fn login_survives_a_restart_and_logout_does_too() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());

    let first = build_app(&config).await?;
    assert_eq!(first.identity.current().await, None);
    first.identity.login("admin", "admin123").await?;
    drop(first);

    let second = build_app(&config).await?;
    assert_eq!(
        second.identity.current().await,
        Some(SessionUser {
            username: "admin".into(),
            is_admin: true,
        })
    );
    second.identity.logout().await?;
    drop(second);

    let third = build_app(&config).await?;
    assert_eq!(third.identity.current().await, None);
    Ok(())
}

#[tokio::test]
async fn failed_login_and_taken_username_write_no_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sessions = Arc::new(FileSessionStore::new(dir.path()));
    let identity = IdentityStore::open(sessions.clone(), Notifier::new()).await?;

    assert!(matches!(
        identity.login("admin", "wrong").await,
        Err(AuthnError::InvalidCredentials)
    ));
    assert!(matches!(
        identity.register("admin", "another1").await,
        Err(AuthnError::UsernameTaken(_))
    ));

    assert!(!sessions.path().exists());
    assert_eq!(sessions.load().await?, None);
    Ok(())
}

#[tokio::test]
async fn session_file_uses_the_documented_shape() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sessions = Arc::new(FileSessionStore::new(dir.path()));
    let identity = IdentityStore::open(sessions.clone(), Notifier::new()).await?;

    identity.register("meera", "secret12").await?;

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(sessions.path())?)?;
    assert_eq!(raw, serde_json::json!({"username": "meera", "isAdmin": false}));
    Ok(())
}

#[tokio::test]
async fn unreadable_session_starts_logged_out() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sessions = FileSessionStore::new(dir.path());
    std::fs::write(sessions.path(), b"{not json")?;

    let app = build_app(&test_config(dir.path())).await?;
    assert_eq!(app.identity.current().await, None);
    Ok(())
}
