//! Engine configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime settings for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Path of the SQLite database file holding character records.
    pub character_db: String,
    /// JSON character loaded into an empty store at startup.
    pub seed_data_path: Option<PathBuf>,
    /// `*` or a comma separated list of origins. CORS is off when unset.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            character_db: "characters.db".into(),
            seed_data_path: None,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = non_empty("SERVER_PORT")
            .or_else(|| non_empty("PORT"))
            .and_then(|p| match p.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %p, "Ignoring invalid server port");
                    None
                }
            })
            .unwrap_or(defaults.server_port);

        Self {
            server_host: non_empty("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            character_db: non_empty("CHARACTER_DB").unwrap_or(defaults.character_db),
            seed_data_path: non_empty("SEED_DATA_PATH").map(PathBuf::from),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server_host, self.server_port).parse()?)
    }
}
