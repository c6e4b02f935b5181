//! Staff directory application: configuration, the GraphQL contract the UI
//! talks to, and the wiring that puts the services behind it.

pub mod app;
pub mod config;
pub mod graphql;

pub use app::{App, build_app};
pub use config::AppConfig;
