//! Rules the sign-in and sign-up forms apply before reaching the store.

use platform_api::{ApiError, ApiResult};

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_login(username: &str, password: &str) -> ApiResult<()> {
    if username.trim().is_empty() {
        return Err(ApiError::invalid("Username is required"));
    }
    if password.is_empty() {
        return Err(ApiError::invalid("Password is required"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_signup(username: &str, password: &str, confirm_password: &str) -> ApiResult<()> {
    validate_login(username, password)?;
    if password != confirm_password {
        return Err(ApiError::invalid("Passwords do not match"));
    }
    Ok(())
}
