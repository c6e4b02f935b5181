use std::{
    io::ErrorKind,
    path::PathBuf,
};

use async_trait::async_trait;
use entity::{SESSION_KEY, SessionUser};
use tokio::sync::RwLock;

use crate::AuthnResult;

/// Durable home of the active session (single slot, overwrite semantics).
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> AuthnResult<Option<SessionUser>>;

    async fn save(&self, user: &SessionUser) -> AuthnResult<()>;

    /// Forget the stored session. Clearing an empty store is not an error.
    async fn clear(&self) -> AuthnResult<()>;
}

/// Keeps the session as `<dir>/user.json`.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_KEY}.json"))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AuthnResult<Option<SessionUser>> {
        match tokio::fs::read(self.path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, user: &SessionUser) -> AuthnResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_vec(user)?;
        let tmp = self.dir.join(format!(".{SESSION_KEY}.json.tmp"));
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, self.path()).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthnResult<()> {
        match tokio::fs::remove_file(self.path()).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<SessionUser>>,
}

impl MemorySessionStore {
    pub fn with_session(user: SessionUser) -> Self {
        Self {
            slot: RwLock::new(Some(user)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AuthnResult<Option<SessionUser>> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, user: &SessionUser) -> AuthnResult<()> {
        *self.slot.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> AuthnResult<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthnError;
    use tempfile::TempDir;

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".into(),
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn file_store_starts_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileSessionStore::new(tmp.path().join("state"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_writes_the_literal_session_shape() {
        let tmp = TempDir::new().unwrap();
        let store = FileSessionStore::new(tmp.path());
        store.save(&admin()).await.unwrap();

        let raw = std::fs::read_to_string(tmp.path().join("user.json")).unwrap();
        assert_eq!(raw, r#"{"username":"admin","isAdmin":true}"#);
        assert_eq!(store.load().await.unwrap(), Some(admin()));
    }

    #[tokio::test]
    async fn file_store_clear_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = FileSessionStore::new(tmp.path());
        store.save(&admin()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn file_store_reports_garbage_as_corrupt() {
        let tmp = TempDir::new().unwrap();
        let store = FileSessionStore::new(tmp.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load().await, Err(AuthnError::Corrupt(_))));
    }

    #[tokio::test]
    async fn memory_store_overwrites_previous_session() {
        let store = MemorySessionStore::with_session(admin());
        let user = SessionUser {
            username: "user".into(),
            is_admin: false,
        };
        store.save(&user).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));
    }
}
