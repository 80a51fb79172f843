//! Configuration module for the demo backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the BloodLink app binds to
    pub bloodlink_addr: SocketAddr,
    /// Address the GateKeeper app binds to
    pub gatekeeper_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bloodlink_addr = parse_addr("DEMODASH_BLOODLINK_ADDR", "127.0.0.1:8080")?;
        let gatekeeper_addr = parse_addr("DEMODASH_GATEKEEPER_ADDR", "127.0.0.1:8081")?;

        let log_level = env::var("DEMODASH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bloodlink_addr,
            gatekeeper_addr,
            log_level,
        })
    }
}

fn parse_addr(var: &str, default: &str) -> Result<SocketAddr, AppError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|_| {
        AppError::InvalidConfig(format!("{var} is not a valid socket address: {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DEMODASH_BLOODLINK_ADDR");
        env::remove_var("DEMODASH_GATEKEEPER_ADDR");
        env::remove_var("DEMODASH_LOG_LEVEL");

        let config = Config::from_env().expect("default config parses");

        assert_eq!(config.bloodlink_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.gatekeeper_addr.to_string(), "127.0.0.1:8081");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_addr_is_rejected() {
        // Dedicated var name so the default-config test can run in parallel
        env::set_var("DEMODASH_TEST_ADDR", "not-an-address");
        let result = parse_addr("DEMODASH_TEST_ADDR", "127.0.0.1:0");
        env::remove_var("DEMODASH_TEST_ADDR");

        assert!(result.is_err());
    }
}
