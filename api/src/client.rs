use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use types::{DashboardStats, Error, LoginRequest, LoginResponse, Result, Session};

use crate::{ApiConfig, LOGIN_PATH, STATS_PATH, SupportApi};

/// [`SupportApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl SupportApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let url = self.config.endpoint(LOGIN_PATH)?;
        tracing::debug!(%url, email = %request.email, "Submitting login");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(%status, "Login rejected");
            return Err(Error::InvalidCredentials);
        }

        let body: LoginResponse = decode(response).await?;
        Session::try_from(body)
    }

    async fn dashboard_stats(&self, api_key: &SecretString) -> Result<DashboardStats> {
        let url = self.config.endpoint(STATS_PATH)?;
        tracing::debug!(%url, "Fetching dashboard stats");

        let response = self
            .client
            .get(url)
            .bearer_auth(api_key.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            Error::malformed(e)
        } else {
            transport(e)
        }
    })
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.without_url().to_string())
}
