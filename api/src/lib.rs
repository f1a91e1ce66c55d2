//! Client side of the support API.
//!
//! Screens talk to the remote service only through [`SupportApi`], so they can
//! be driven by [`HttpApi`] in the browser and by an in-memory fake in tests.

mod client;
mod config;

use async_trait::async_trait;
use secrecy::SecretString;
use types::{DashboardStats, LoginRequest, Result, Session};

pub use client::HttpApi;
pub use config::{ApiConfig, DEFAULT_API_URL};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const STATS_PATH: &str = "/api/dashboard/stats";

#[async_trait(?Send)]
pub trait SupportApi {
    /// Exchange credentials for a session.
    ///
    /// Any non-success status is reported as
    /// [`Error::InvalidCredentials`](types::Error::InvalidCredentials).
    async fn login(&self, request: &LoginRequest) -> Result<Session>;

    /// Fetch the dashboard summary, authorized with `api_key`.
    async fn dashboard_stats(&self, api_key: &SecretString) -> Result<DashboardStats>;
}
