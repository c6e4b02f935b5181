use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use platform_api::Notifier;
use platform_authn::{FileSessionStore, IdentityStore, SessionStore};
use products_hr::DirectoryService;

use crate::config::AppConfig;
use crate::graphql::{GraphqlData, SchemaType, build_schema};

/// Everything a front end needs: the schema plus the notice channel it
/// should render.
pub struct App {
    pub schema: SchemaType,
    pub notifier: Notifier,
    pub directory: Arc<DirectoryService>,
    pub identity: Arc<IdentityStore>,
}

pub async fn build_app(config: &AppConfig) -> Result<App> {
    let sessions: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(config.session_dir.clone()));
    assemble(config, sessions).await
}

/// Wire the services around an arbitrary session store.
pub async fn assemble(config: &AppConfig, sessions: Arc<dyn SessionStore>) -> Result<App> {
    let notifier = Notifier::new();
    let today = Local::now().date_naive();
    let directory = Arc::new(DirectoryService::seeded(
        &config.seed_options(today),
        config.latency,
        notifier.clone(),
    ));
    let identity = Arc::new(
        IdentityStore::open(sessions, notifier.clone())
            .await
            .context("failed to open identity store")?,
    );
    let schema = build_schema(GraphqlData {
        directory: directory.clone(),
        identity: identity.clone(),
    });
    Ok(App {
        schema,
        notifier,
        directory,
        identity,
    })
}
