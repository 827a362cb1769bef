use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::core::api::EndpointConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub api: ApiConfig,
    pub data: DataConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Remote endpoints and their static credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Paged user directory; also serves `/{id}` for the profile.
    pub users_url: String,
    /// Flat post list.
    pub posts_url: String,
    /// Sent as `x-api-key` to the users endpoint.
    pub api_key: Option<String>,
    /// User shown on the Profile view.
    pub profile_user_id: u64,
    /// Posts kept from the flat list.
    pub posts_limit: usize,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: "https://reqres.in/api/users".to_string(),
            posts_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            api_key: Some("reqres-free-v1".to_string()),
            profile_user_id: 2,
            posts_limit: 20,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL for api.{field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl ApiConfig {
    pub fn users_endpoint(&self) -> Result<EndpointConfig, ConfigError> {
        let endpoint = EndpointConfig::new(&self.users_url).map_err(|source| {
            ConfigError::InvalidUrl {
                field: "users_url",
                source,
            }
        })?;
        Ok(match self.api_key {
            Some(ref key) => endpoint.with_api_key(key.clone()),
            None => endpoint,
        })
    }

    pub fn posts_endpoint(&self) -> Result<EndpointConfig, ConfigError> {
        EndpointConfig::new(&self.posts_url).map_err(|source| ConfigError::InvalidUrl {
            field: "posts_url",
            source,
        })
    }
}

impl AppConfig {
    /// Load defaults ← `~/.config/dashtui/config.toml` ← `DASHTUI_*` env.
    /// Falls back to `Default` if extraction fails.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::figment(&config_path).extract() {
            Ok(config) => {
                log::info!("Loaded config (file: {})", config_path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {e}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Provider chain used by [`AppConfig::load`].
    pub fn figment(config_path: &std::path::Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("DASHTUI_").split("__"))
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("dashtui"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("dashtui").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
