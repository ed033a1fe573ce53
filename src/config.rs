use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Empty list means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            index_file: default_index_file(),
            allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse::<T>().ok())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Loads `CONFIG_PATH` (default `config.toml`), falling back to environment
    /// variables when the file does not exist. Environment variables always win.
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{config_path} not found, configuring from environment");
                let url = get_env("DATABASE_URL").ok_or_else(|| {
                    AppError::ConfigError(format!(
                        "DATABASE_URL is not set and {config_path} was not found"
                    ))
                })?;
                Config {
                    server: ServerConfig {
                        host: default_host(),
                        port: default_port(),
                    },
                    database: DatabaseConfig {
                        url,
                        max_connections: default_max_connections(),
                        run_migrations: true,
                    },
                    web: WebConfig::default(),
                }
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "cannot read {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        toml::from_str(raw).map_err(|e| AppError::ConfigError(format!("invalid config file: {e}")))
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = get_env("SERVER_HOST") {
            self.server.host = v;
        }
        // PORT is what most hosting platforms inject
        if let Some(p) = get_env_parse("SERVER_PORT").or_else(|| get_env_parse("PORT")) {
            self.server.port = p;
        }
        if let Some(v) = get_env("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(mc) = get_env_parse("DB_MAX_CONNECTIONS") {
            self.database.max_connections = mc;
        }
        if let Some(run) = get_env_parse("DB_RUN_MIGRATIONS") {
            self.database.run_migrations = run;
        }
        if let Some(v) = get_env("STATIC_DIR") {
            self.web.static_dir = v;
        }
        if let Some(v) = get_env("CORS_ALLOWED_ORIGINS") {
            self.web.allowed_origins = split_origins(&v);
        }
    }
}
