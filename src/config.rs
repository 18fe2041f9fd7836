//! Server configuration read from environment variables
//!
//! - `CHATBOT_HOST`: bind address (default `0.0.0.0`)
//! - `CHATBOT_PORT`: bind port (default `8000`)
//! - `CHATBOT_GLOSSARY_PATH`: optional JSON glossary replacing the built-in one

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::glossary::Glossary;

pub const HOST_VAR: &str = "CHATBOT_HOST";
pub const PORT_VAR: &str = "CHATBOT_PORT";
pub const GLOSSARY_PATH_VAR: &str = "CHATBOT_GLOSSARY_PATH";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `None` serves the built-in glossary
    pub glossary_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_str = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host_str.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidVar {
                var: HOST_VAR,
                value: host_str.clone(),
                reason: e.to_string(),
            }
        })?;

        let port: u16 = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    var: PORT_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let glossary_path = lookup(GLOSSARY_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(|p| resolve_path(Path::new(&p)));

        Ok(Self {
            host,
            port,
            glossary_path,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured glossary, falling back to the built-in data
    pub fn load_glossary(&self) -> Result<Glossary, ConfigError> {
        match &self.glossary_path {
            Some(path) => Ok(Glossary::from_file(path)?),
            None => Ok(Glossary::builtin()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            glossary_path: None,
        }
    }
}

/// Relative paths are taken from the current directory
fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    current_dir.join(path)
}
