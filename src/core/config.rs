// src/core/config.rs
use std::env;
use std::time::Duration;
use log::LevelFilter;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Breach lookup
    pub breach_api_url: String,
    pub breach_timeout: Duration,
    pub breach_user_agent: String,
    pub breach_rate_limit_max: usize,
    pub breach_rate_limit_window: Duration,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8001,

            // Breach lookup
            breach_api_url: "https://api.pwnedpasswords.com".to_string(),
            breach_timeout: Duration::from_secs(5),
            breach_user_agent: "SecurePasswordGenerator/1.0".to_string(),
            breach_rate_limit_max: 1,
            breach_rate_limit_window: Duration::from_millis(1500), // 1 request per 1.5s (free tier)

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Overlay values from `lookup` onto the defaults; unparsable values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Breach lookup
        if let Some(url) = lookup("BREACH_API_URL") {
            config.breach_api_url = url;
        }

        if let Some(val) = lookup("BREACH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_secs(secs);
            }
        }

        if let Some(agent) = lookup("BREACH_USER_AGENT") {
            config.breach_user_agent = agent;
        }

        if let Some(val) = lookup("BREACH_RATE_LIMIT_MAX") {
            if let Ok(max) = val.parse() {
                config.breach_rate_limit_max = max;
            }
        }

        if let Some(val) = lookup("BREACH_RATE_LIMIT_WINDOW_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                config.breach_rate_limit_window = Duration::from_millis(ms);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }
}
