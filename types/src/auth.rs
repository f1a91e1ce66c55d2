use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{Error, Session, UserProfile, secret_string};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful answer of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "apiKey", with = "secret_string")]
    pub api_key: SecretString,
    pub user: UserProfile,
}

impl TryFrom<LoginResponse> for Session {
    type Error = Error;

    fn try_from(response: LoginResponse) -> Result<Self, Self::Error> {
        // An empty token would read back as "logged out" on the next load.
        if response.api_key.expose_secret().is_empty() {
            return Err(Error::malformed("empty apiKey"));
        }

        Ok(Self {
            api_key: response.api_key,
            user: response.user,
        })
    }
}
