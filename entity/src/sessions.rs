use serde::{Deserialize, Serialize};

/// Storage key the active session lives under.
pub const SESSION_KEY: &str = "user";

/// The logged-in user as persisted between runs. Carries no credentials.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    pub is_admin: bool,
}
