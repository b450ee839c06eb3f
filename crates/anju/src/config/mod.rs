use crate::recommender::ScoringConfig;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the recommender.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog = CatalogConfig {
            profiles_path: path_var("ANJU_PROFILES_PATH", CatalogConfig::DEFAULT_PROFILES),
            dishes_path: path_var("ANJU_DISHES_PATH", CatalogConfig::DEFAULT_DISHES),
            questions_path: path_var("ANJU_QUESTIONS_PATH", CatalogConfig::DEFAULT_QUESTIONS),
        };

        let config = match env::var("ANJU_SCORING_CONFIG") {
            Ok(path) if !path.trim().is_empty() => load_scoring_config(path.trim())?,
            _ => ScoringConfig::default(),
        };
        let seed = match env::var("ANJU_JITTER_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_seed(&raw)?),
            _ => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            catalog,
            scoring: ScoringSettings { config, seed },
        })
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Parses a jitter seed given on the command line or in the environment.
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidSeed {
            value: raw.to_string(),
        })
}

/// Reads a JSON [`ScoringConfig`]; omitted keys keep their defaults.
pub fn load_scoring_config<P: AsRef<Path>>(path: P) -> Result<ScoringConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ScoringFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ScoringFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Locations of the reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub profiles_path: PathBuf,
    pub dishes_path: PathBuf,
    pub questions_path: PathBuf,
}

impl CatalogConfig {
    pub const DEFAULT_PROFILES: &'static str = "data/type_profiles.csv";
    pub const DEFAULT_DISHES: &'static str = "data/dishes.csv";
    pub const DEFAULT_QUESTIONS: &'static str = "data/questions.csv";
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            profiles_path: PathBuf::from(Self::DEFAULT_PROFILES),
            dishes_path: PathBuf::from(Self::DEFAULT_DISHES),
            questions_path: PathBuf::from(Self::DEFAULT_QUESTIONS),
        }
    }
}

/// Scoring constants plus the optional fixed jitter seed.
#[derive(Debug, Clone, Default)]
pub struct ScoringSettings {
    pub config: ScoringConfig,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidSeed {
        value: String,
    },
    ScoringFile {
        path: PathBuf,
        source: std::io::Error,
    },
    ScoringFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSeed { value } => {
                write!(f, "jitter seed '{}' must be an unsigned 64-bit integer", value)
            }
            ConfigError::ScoringFile { path, .. } => {
                write!(f, "unable to read scoring config {}", path.display())
            }
            ConfigError::ScoringFormat { path, source } => {
                write!(f, "invalid scoring config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidSeed { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ScoringFile { source, .. } => Some(source),
            ConfigError::ScoringFormat { source, .. } => Some(source),
        }
    }
}
