use std::sync::Arc;

use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;

pub mod notice;

pub use notice::{Level, Notice, Notifier};

/// Shared result type for directory and GraphQL operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("resource not found")]
    NotFound,
    #[error("{0}")]
    InvalidInput(String),
    #[error("internal server error")]
    Internal(Arc<anyhow::Error>),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self::Internal(Arc::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        let mut err = Error::new(self.to_string());
        err = err.extend_with(|_err, e| {
            e.set("code", self.code());
        });
        if let ApiError::InvalidInput(_) = self {
            err = err.extend_with(|_err, e| {
                e.set("type", "BAD_REQUEST");
            });
        }
        err
    }
}

/// Convert any error into a GraphQL error payload while hiding internals.
pub fn internal_error(err: impl Into<anyhow::Error>) -> Error {
    ApiError::internal(err.into()).extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn internal_errors_are_masked() {
        let err = internal_error(anyhow::anyhow!("boom"));
        assert_eq!(err.message, "internal server error");
        let extra = err.extensions.as_ref().and_then(|map| map.get("code"));
        let code = extra.cloned();
        assert_eq!(code, Some(Value::from("INTERNAL")));
    }

    #[test]
    fn invalid_input_keeps_its_message_and_marks_bad_request() {
        let err = ApiError::invalid("Name must be at least 2 characters.").extend();
        assert_eq!(err.message, "Name must be at least 2 characters.");
        let ext = err.extensions.as_ref().unwrap();
        assert_eq!(ext.get("code").cloned(), Some(Value::from("INVALID_INPUT")));
        assert_eq!(ext.get("type").cloned(), Some(Value::from("BAD_REQUEST")));
    }

    #[test]
    fn not_found_reports_its_code() {
        let err = ApiError::NotFound;
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "resource not found");
    }
}
