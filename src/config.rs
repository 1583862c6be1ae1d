//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while assembling host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// The Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `RTCLOCK_BIND`: listen address, default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] when a variable is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let bind = env_parse("RTCLOCK_BIND", DEFAULT_BIND)?;
        Ok(Self { bind, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
        Err(_) => Ok(default),
    }
}
