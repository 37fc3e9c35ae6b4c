use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

/// Настройки импорта продаж
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Вычитать стоимость доставки из чистой прибыли
    #[serde(default = "default_true")]
    pub subtract_shipping: bool,
    /// Сколько строк показывать в предпросмотре
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            subtract_shipping: true,
            preview_rows: default_preview_rows(),
        }
    }
}

fn default_database_path() -> String {
    "target/db/app.db".into()
}

fn default_port() -> u16 {
    3000
}

fn default_log_dir() -> String {
    "target/logs".into()
}

fn default_true() -> bool {
    true
}

fn default_preview_rows() -> usize {
    5
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000

[logging]
dir = "target/logs"

[import]
subtract_shipping = true
preview_rows = 5
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Returns the path the config was read from, `None` for the embedded default.
/// Runs before the tracing subscriber exists, so the caller logs the outcome.
pub fn load_config() -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok((config, Some(config_path)));
            }
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok((config, None))
}

/// Resolve a configured path: absolute as is, relative against the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}
