mod lockout;
mod types;

pub use lockout::{LockoutState, LOCKOUT_SECS, MAX_ATTEMPTS};
pub use types::{validate, Field, LoginError, LoginRequest, LoginResponse, SubmitStatus};
