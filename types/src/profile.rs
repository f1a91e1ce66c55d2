use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user record returned at login and kept in storage until logout.
///
/// Only `name` and `email` are interpreted; anything else the server sends is
/// carried along untouched so that writing the profile back to storage is
/// lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name if set, else email, else a generic label.
    pub fn display_label(&self) -> &str {
        non_blank(&self.name)
            .or_else(|| non_blank(&self.email))
            .unwrap_or("Admin")
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", non_blank(&self.name).unwrap_or("Admin"))
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
