//! Account registration, lookup and login.

pub mod login;
pub mod service;

pub use login::{INVALID_CREDENTIALS_MESSAGE, LoginOutcome, LoginRequest};
pub use service::AccountService;
