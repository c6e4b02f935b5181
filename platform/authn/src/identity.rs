use std::sync::Arc;

use entity::{Account, SessionUser};
use platform_api::Notifier;
use platform_api::notice::Notice;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::password::{hash_password, verify_password};
use crate::session_store::SessionStore;
use crate::{AuthnError, AuthnResult};

/// Where the UI is sent after a logout.
pub const LOGIN_ROUTE: &str = "/login";

const SESSION_SAVE_FAILED: &str = "Could not save your session";

/// Accounts every fresh store starts with: `(username, password, is_admin)`.
pub const DEFAULT_ACCOUNTS: &[(&str, &str, bool)] =
    &[("admin", "admin123", true), ("user", "user123", false)];

/// Account list plus the active session.
///
/// The account list lives only as long as the store; registration is lost on
/// restart. The active session is mirrored to a [`SessionStore`] so it
/// survives one. The admin flag is carried along but gates nothing.
pub struct IdentityStore {
    accounts: RwLock<Vec<Account>>,
    current: RwLock<Option<SessionUser>>,
    sessions: Arc<dyn SessionStore>,
    notifier: Notifier,
}

impl IdentityStore {
    /// Build a store with [`DEFAULT_ACCOUNTS`] and restore any persisted
    /// session.
    pub async fn open(sessions: Arc<dyn SessionStore>, notifier: Notifier) -> AuthnResult<Self> {
        let mut accounts = Vec::with_capacity(DEFAULT_ACCOUNTS.len());
        for (username, password, is_admin) in DEFAULT_ACCOUNTS {
            accounts.push(Account {
                username: (*username).to_string(),
                password_hash: hash_blocking(password).await?,
                is_admin: *is_admin,
            });
        }
        Ok(Self::with_accounts(accounts, sessions, notifier).await)
    }

    pub async fn with_accounts(
        accounts: Vec<Account>,
        sessions: Arc<dyn SessionStore>,
        notifier: Notifier,
    ) -> Self {
        let store = Self {
            accounts: RwLock::new(accounts),
            current: RwLock::new(None),
            sessions,
            notifier,
        };
        store.restore().await;
        store
    }

    /// Adopt whatever session was persisted last. The stored value is trusted
    /// as-is; credentials are not re-checked.
    async fn restore(&self) {
        match self.sessions.load().await {
            Ok(Some(user)) => {
                info!(username = %user.username, "restored session");
                *self.current.write().await = Some(user);
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "ignoring unreadable session"),
        }
    }

    pub async fn current(&self) -> Option<SessionUser> {
        self.current.read().await.clone()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    #[instrument(name = "identity.login", skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AuthnResult<SessionUser> {
        let candidate = {
            let accounts = self.accounts.read().await;
            accounts
                .iter()
                .find(|a| a.username == username)
                .map(|a| (a.session_user(), a.password_hash.clone()))
        };

        let verified = match candidate {
            Some((user, stored)) => verify_blocking(password, stored).await?.then_some(user),
            None => None,
        };
        let Some(user) = verified else {
            self.notifier.error("Invalid username or password");
            return Err(AuthnError::InvalidCredentials);
        };

        if let Err(err) = self.begin_session(&user).await {
            warn!(error = %err, "login could not persist session");
            self.notifier.error(SESSION_SAVE_FAILED);
            return Err(err);
        }
        self.notifier.success("Logged in successfully");
        info!(is_admin = user.is_admin, "login succeeded");
        Ok(user)
    }

    /// Append a non-admin account and log it in. The account is only kept
    /// once the session has been persisted.
    #[instrument(name = "identity.register", skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> AuthnResult<SessionUser> {
        let password_hash = hash_blocking(password).await?;

        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.username == username) {
            drop(accounts);
            self.notifier.error("Username already exists");
            return Err(AuthnError::UsernameTaken(username.to_string()));
        }
        let account = Account {
            username: username.to_string(),
            password_hash,
            is_admin: false,
        };
        let user = account.session_user();

        if let Err(err) = self.begin_session(&user).await {
            drop(accounts);
            warn!(error = %err, "registration could not persist session");
            self.notifier.error(SESSION_SAVE_FAILED);
            return Err(err);
        }
        accounts.push(account);
        drop(accounts);

        self.notifier.success("Account created successfully");
        info!("account registered");
        Ok(user)
    }

    /// Drop the active session everywhere and send the UI back to sign-in.
    #[instrument(name = "identity.logout", skip(self))]
    pub async fn logout(&self) -> AuthnResult<()> {
        self.sessions.clear().await?;
        let previous = self.current.write().await.take();
        if let Some(user) = previous {
            info!(username = %user.username, "logged out");
        }
        self.notifier.notify(Notice::navigate(LOGIN_ROUTE));
        self.notifier.info("Logged out successfully");
        Ok(())
    }

    async fn begin_session(&self, user: &SessionUser) -> AuthnResult<()> {
        self.sessions.save(user).await?;
        *self.current.write().await = Some(user.clone());
        Ok(())
    }
}

async fn hash_blocking(password: &str) -> AuthnResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| AuthnError::Hash(err.to_string()))?
}

async fn verify_blocking(password: &str, stored: String) -> AuthnResult<bool> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|err| AuthnError::Hash(err.to_string()))?
}
