//! Server configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `PORT` wins over `SERVER_PORT` so the usual hosting convention works.
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("SERVER_HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT").map(|v| ("PORT", v)).or_else(|| {
            lookup("SERVER_PORT").map(|v| ("SERVER_PORT", v))
        }) {
            Some((key, raw)) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid(key, raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }
}
