//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_DB_PATH: &str = "data/portfolio.redb";
pub const DEFAULT_STEAM_API_BASE: &str = "https://api.steampowered.com";
pub const DEFAULT_STEAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamConfig {
    /// Absent key means the games proxy answers every request with an error.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub db_path: PathBuf,
    pub steam: SteamConfig,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// - `PORT` (default 3000)
    /// - `ASSETS_DIR`: content JSON and static images (default `assets`)
    /// - `DIST_DIR`: built frontend (default `dist`)
    /// - `DB_PATH`: redb file (default `data/portfolio.redb`)
    /// - `STEAM_API_KEY`: optional
    /// - `STEAM_API_BASE`: default `https://api.steampowered.com`
    /// - `STEAM_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let path = |var: &str, default: &str| PathBuf::from(lookup(var).unwrap_or_else(|| default.to_string()));

        let steam = SteamConfig {
            api_key: lookup("STEAM_API_KEY").filter(|k| !k.trim().is_empty()),
            base_url: lookup("STEAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_STEAM_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: parse_or(
                "STEAM_TIMEOUT_SECS",
                lookup("STEAM_TIMEOUT_SECS"),
                DEFAULT_STEAM_TIMEOUT_SECS,
            )?,
        };

        Ok(Config {
            port,
            assets_dir: path("ASSETS_DIR", DEFAULT_ASSETS_DIR),
            dist_dir: path("DIST_DIR", DEFAULT_DIST_DIR),
            db_path: path("DB_PATH", DEFAULT_DB_PATH),
            steam,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.db_path, PathBuf::from("data/portfolio.redb"));
        assert_eq!(config.steam.api_key, None);
        assert_eq!(config.steam.base_url, "https://api.steampowered.com");
        assert_eq!(config.steam.timeout_secs, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DB_PATH", "/tmp/cities.redb"),
            ("STEAM_API_KEY", "secret"),
            ("STEAM_API_BASE", "http://127.0.0.1:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("/tmp/cities.redb"));
        assert_eq!(config.steam.api_key.as_deref(), Some("secret"));
        assert_eq!(config.steam.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = Config::from_lookup(lookup(&[("STEAM_API_KEY", "  ")])).unwrap();
        assert_eq!(config.steam.api_key, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
