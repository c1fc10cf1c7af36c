//! Runtime configuration, resolved from the environment with CLI
//! overrides applied in `main`.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| {
                format!("invalid bind address {}:{}", self.host, self.port)
            })
    }
}

impl Config {
    /// Resolve configuration from `SERVER_HOST` / `SERVER_PORT`.
    /// Unparseable values fall back to defaults with a warning rather than
    /// aborting startup.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.is_empty() {
                config.server.host = host;
            }
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(_) => warn!(
                    value = %port,
                    default = DEFAULT_PORT,
                    "SERVER_PORT is not a valid port, using default"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_yields_a_bindable_address() {
        let config = Config::default();
        let addr = config.server.socket_addr().unwrap();
        assert_eq!(addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn garbage_host_is_rejected_at_addr_resolution() {
        let config = Config {
            server: ServerConfig {
                host: "not a host".to_string(),
                port: 80,
            },
        };
        assert!(config.server.socket_addr().is_err());
    }
}
