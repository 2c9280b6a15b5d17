use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Wire types
// ============================================================================

/// JSON body of `POST /user/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful (2xx) response from the auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// ============================================================================
// Form state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Loading,
}

/// Which input should receive focus after failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// User-visible failures of a login attempt. Every variant's `Display`
/// string is shown verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Both email and password are required!")]
    MissingFields,
    #[error("You are blocked. Please wait for the countdown to complete.")]
    LockedOut,
    #[error("Invalid credentials. You have {0} attempts left.")]
    AttemptFailed(u32),
    #[error("Too many failed attempts. You are blocked for 30 seconds.")]
    Blocked,
}

/// Submit-time form check.
///
/// Emptiness is judged on the trimmed value, but the returned request
/// carries the fields as typed. On failure, yields the first field that
/// needs focus, email before password.
pub fn validate(email: &str, password: &str) -> Result<LoginRequest, Field> {
    if email.trim().is_empty() {
        return Err(Field::Email);
    }
    if password.trim().is_empty() {
        return Err(Field::Password);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}
