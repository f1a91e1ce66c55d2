use api::ApiConfig;
use tracing::Level;
use types::Result;

/// Settings baked in at build time or read from the page.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            api: ApiConfig::resolve(page_origin().as_deref())?,
        })
    }
}

/// Build-time `SUPPORT_ADMIN_LOG`, defaulting to `info`.
pub fn log_level() -> Level {
    parse_level(option_env!("SUPPORT_ADMIN_LOG"))
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

#[cfg(feature = "web")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(feature = "web"))]
fn page_origin() -> Option<String> {
    None
}
