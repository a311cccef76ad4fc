use crate::ranking::vocabulary::{Vocabulary, DEFAULT_FUZZY_THRESHOLD};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub ranking: RankingConfig,
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

        let fuzzy_threshold = match env::var("APP_FUZZY_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidFuzzyThreshold { value: raw })?,
            Err(_) => DEFAULT_FUZZY_THRESHOLD,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            ranking: RankingConfig {
                known_skills: env::var("APP_KNOWN_SKILLS").ok().and_then(|raw| parse_list(&raw)),
                known_locations: env::var("APP_KNOWN_LOCATIONS")
                    .ok()
                    .and_then(|raw| parse_list(&raw)),
                fuzzy_threshold,
            },
        })
    }
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

/// Vocabulary overrides and matching tolerances for the ranking pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub known_skills: Option<Vec<String>>,
    pub known_locations: Option<Vec<String>>,
    pub fuzzy_threshold: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            known_skills: None,
            known_locations: None,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl RankingConfig {
    /// Builds the vocabulary, substituting configured lists for the standard ones.
    pub fn vocabulary(&self) -> Vocabulary {
        let standard = Vocabulary::standard();
        let skills = self.known_skills.clone().unwrap_or(standard.skills);
        let locations = self.known_locations.clone().unwrap_or(standard.locations);
        Vocabulary::new(skills, locations).with_fuzzy_threshold(self.fuzzy_threshold)
    }
}

fn parse_list(raw: &str) -> Option<Vec<String>> {
    let entries: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFuzzyThreshold { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFuzzyThreshold { value } => write!(
                f,
                "APP_FUZZY_THRESHOLD must be a non-negative integer (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidFuzzyThreshold { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_KNOWN_SKILLS");
        env::remove_var("APP_KNOWN_LOCATIONS");
        env::remove_var("APP_FUZZY_THRESHOLD");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.ranking, RankingConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn vocabulary_lists_replace_standard_entries() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_KNOWN_SKILLS", "Rust, Go, ,Erlang");
        env::set_var("APP_FUZZY_THRESHOLD", "1");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        let vocabulary = config.ranking.vocabulary();
        assert_eq!(vocabulary.skills, vec!["Rust", "Go", "Erlang"]);
        assert_eq!(vocabulary.locations, Vocabulary::standard().locations);
        assert_eq!(vocabulary.fuzzy_threshold, 1);
    }

    #[test]
    fn rejects_invalid_fuzzy_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_FUZZY_THRESHOLD", "three");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidFuzzyThreshold { value }) => assert_eq!(value, "three"),
            other => panic!("expected invalid threshold error, got {other:?}"),
        }
    }
}
