use secrecy::SecretString;

use crate::UserProfile;

/// Storage key holding the raw bearer token.
pub const API_KEY_STORAGE_KEY: &str = "apiKey";
/// Storage key holding the JSON-serialized [`UserProfile`].
pub const USER_STORAGE_KEY: &str = "user";

/// A bearer token paired with the profile it was issued for.
#[derive(Debug, Clone)]
pub struct Session {
    pub api_key: SecretString,
    pub user: UserProfile,
}

/// Serde helpers for fields that must travel as plain strings but stay
/// wrapped in [`SecretString`] in memory.
pub mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
