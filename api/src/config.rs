use types::{Error, Result};
use url::Url;

/// Used when neither a build-time URL nor a page origin is available.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the support API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API url '{base_url}': {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API url must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        // Endpoints are joined relative to the base, so it has to look like a
        // directory or `join` would drop its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url })
    }

    /// Build-time `SUPPORT_ADMIN_API_URL`, else the page origin, else
    /// [`DEFAULT_API_URL`].
    pub fn resolve(origin: Option<&str>) -> Result<Self> {
        Self::new(pick_base(option_env!("SUPPORT_ADMIN_API_URL"), origin))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Config(format!("invalid endpoint path '{path}': {e}")))
    }
}

fn pick_base<'a>(configured: Option<&'a str>, origin: Option<&'a str>) -> &'a str {
    configured
        .filter(|s| !s.is_empty())
        .or(origin.filter(|s| !s.is_empty() && *s != "null"))
        .unwrap_or(DEFAULT_API_URL)
}
