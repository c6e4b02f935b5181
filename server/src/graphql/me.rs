use async_graphql::SimpleObject;
use entity::SessionUser;

#[derive(Clone, Debug, SimpleObject)]
pub struct SessionNode {
    pub username: String,
    pub is_admin: bool,
}

impl From<SessionUser> for SessionNode {
    fn from(value: SessionUser) -> Self {
        Self {
            username: value.username,
            is_admin: value.is_admin,
        }
    }
}

/// Outcome of a sign-in or sign-up attempt. Failures are data, not errors.
#[derive(Clone, Debug, SimpleObject, Default)]
pub struct AuthPayload {
    pub ok: bool,
    pub user: Option<SessionNode>,
    pub error: Option<String>,
}

impl AuthPayload {
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            ok: true,
            user: Some(user.into()),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            user: None,
            error: Some(message.into()),
        }
    }
}
