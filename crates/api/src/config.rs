//! Process configuration, read once from the environment at start-up.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "COUNTSHEET_HOST";
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset or blank variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(HOST_VAR)) {
            config.host = value.parse().map_err(|_| ConfigError::Invalid {
                var: HOST_VAR,
                value: value.clone(),
                expected: "IP address",
            })?;
        }

        if let Some(value) = non_blank(lookup(PORT_VAR)) {
            config.port = value.parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value: value.clone(),
                expected: "port number",
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
