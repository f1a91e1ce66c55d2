mod auth;
mod error;
mod profile;
mod session;
mod stats;

pub use auth::{LoginRequest, LoginResponse};
pub use error::{Error, Result};
pub use profile::UserProfile;
pub use session::{API_KEY_STORAGE_KEY, Session, USER_STORAGE_KEY, secret_string};
pub use stats::DashboardStats;
