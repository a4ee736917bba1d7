// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::breach::client::DEFAULT_BASE_URL;

// Configuration for the password analysis service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Breach Lookup
    pub breach_check_enabled: bool,
    pub breach_api_url: String,
    pub breach_timeout: Duration,

    // Strength Analysis
    pub dictionary_path: Option<PathBuf>,
    pub max_analysis_length: usize,

    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 5000,

            // Breach Lookup
            breach_check_enabled: true,
            breach_api_url: DEFAULT_BASE_URL.to_string(),
            breach_timeout: Duration::from_secs(5),

            // Strength Analysis
            dictionary_path: None,
            max_analysis_length: 256,

            // Password Generation
            default_password_length: 12,
            max_password_length: 128,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `load` but reads keys through `lookup`, so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        parse_into(&lookup, "WEB_PORT", &mut config.web_port);

        // Breach Lookup
        parse_into(&lookup, "BREACH_CHECK_ENABLED", &mut config.breach_check_enabled);

        if let Some(url) = lookup("BREACH_API_URL") {
            config.breach_api_url = url;
        }

        let mut timeout_secs = config.breach_timeout.as_secs();
        parse_into(&lookup, "BREACH_TIMEOUT_SECS", &mut timeout_secs);
        config.breach_timeout = Duration::from_secs(timeout_secs);

        // Strength Analysis
        if let Some(path) = lookup("DICTIONARY_PATH") {
            if !path.trim().is_empty() {
                config.dictionary_path = Some(PathBuf::from(path));
            }
        }

        parse_into(&lookup, "MAX_ANALYSIS_LENGTH", &mut config.max_analysis_length);

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

// Overwrite `target` when `key` is set and parses; keep the default otherwise.
fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid {}={:?}, keeping {:?}", key, val, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 5000));
        assert!(config.breach_check_enabled);
        assert_eq!(config.breach_api_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.breach_timeout, Duration::from_secs(5));
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.max_password_length, 128);
        assert_eq!(config.max_analysis_length, 256);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.dictionary_path.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = config_from(&[
            ("WEB_PORT", "8080"),
            ("BREACH_CHECK_ENABLED", "false"),
            ("BREACH_TIMEOUT_SECS", "2"),
            ("DICTIONARY_PATH", "/tmp/words.txt"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "passguard.log"),
        ]);
        assert_eq!(config.web_port, 8080);
        assert!(!config.breach_check_enabled);
        assert_eq!(config.breach_timeout, Duration::from_secs(2));
        assert_eq!(config.dictionary_path, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("passguard.log")));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("WEB_PORT", "not-a-port"),
            ("MAX_PASSWORD_LENGTH", "-3"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.max_password_length, 128);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
