//! Platform authentication: who is logged in, and how that survives a restart.
//!
//! [`IdentityStore`] owns the account list (seeded, in memory only) and the
//! active session. Only the session is durable; it goes through a
//! [`SessionStore`].

use platform_api::ApiError;
use thiserror::Error;

pub mod credentials;
pub mod identity;
pub mod password;
pub mod session_store;

pub use credentials::{MIN_PASSWORD_LEN, validate_login, validate_signup};
pub use identity::{DEFAULT_ACCOUNTS, IdentityStore, LOGIN_ROUTE};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};

#[derive(Debug, Error)]
pub enum AuthnError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username {0} already exists")]
    UsernameTaken(String),
    #[error("session storage failed: {0}")]
    Storage(#[from] std::io::Error),
    #[error("stored session is unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

pub type AuthnResult<T> = Result<T, AuthnError>;

impl AuthnError {
    /// Credential mismatches and name collisions are recoverable by the caller;
    /// everything else is an infrastructure failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AuthnError::InvalidCredentials | AuthnError::UsernameTaken(_)
        )
    }
}

impl From<AuthnError> for ApiError {
    fn from(value: AuthnError) -> Self {
        if value.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::internal(value.into())
        }
    }
}
