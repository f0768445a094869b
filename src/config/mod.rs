use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub limits: FieldLimits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

/// Size limits applied by the form layer.
///
/// `max_input_bytes` rejects oversized raw fields; the `*_max_length` values
/// cap sanitized output in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLimits {
    pub max_input_bytes: usize,
    pub name_max_length: usize,
    pub address_max_length: usize,
    pub notes_max_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 65536,
            name_max_length: 50,
            address_max_length: 255,
            notes_max_length: 1000,
        }
    }
}

/// Read `key` from the environment, falling back to `default`
fn env_or<T: FromStr>(key: &str, default: &str) -> Result<T> {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {key} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("PORT", "3000")?;
        let api_rate_limit = env_or("API_RATE_LIMIT", "100")?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", "1048576")?;

        let max_input_bytes = env_or("MAX_INPUT_BYTES", "65536")?;
        let name_max_length = env_or("NAME_MAX_LENGTH", "50")?;
        let address_max_length = env_or("ADDRESS_MAX_LENGTH", "255")?;
        let notes_max_length = env_or("NOTES_MAX_LENGTH", "1000")?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
            limits: FieldLimits {
                max_input_bytes,
                name_max_length,
                address_max_length,
                notes_max_length,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        let limits = &self.limits;
        if limits.max_input_bytes == 0
            || limits.name_max_length == 0
            || limits.address_max_length == 0
            || limits.notes_max_length == 0
        {
            return Err(Error::Config("Field limits must be non-zero".to_string()));
        }

        if self.server.max_request_body_size < limits.max_input_bytes {
            return Err(Error::Config(
                "MAX_REQUEST_BODY_SIZE must be at least MAX_INPUT_BYTES".to_string(),
            ));
        }

        Ok(())
    }
}
