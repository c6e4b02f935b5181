use serde::{Deserialize, Serialize};

use crate::sessions::SessionUser;

/// A registered login. `password_hash` is a PHC string, never the raw secret.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl Account {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            username: self.username.clone(),
            is_admin: self.is_admin,
        }
    }
}
