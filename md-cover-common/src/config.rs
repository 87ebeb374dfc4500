//! Process configuration
//!
//! The service takes exactly one setting from its environment: the listening
//! port. Everything else is a compiled default.

use crate::{Error, Result};
use std::env::{self, VarError};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variable selecting the listening TCP port
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

/// Pre-built frontend asset tree served for non-API paths
pub const DEFAULT_STATIC_DIR: &str = "./web/dist";

/// Server configuration resolved at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Directory holding the static frontend build
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let port_var = match env::var(PORT_ENV_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                return Err(Error::Config(format!(
                    "{} is not valid unicode: {:?}",
                    PORT_ENV_VAR, raw
                )))
            }
        };

        Ok(Self {
            port: resolve_port(port_var.as_deref())?,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        })
    }

    /// Socket address the HTTP listener binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Resolve the listening port from the raw `PORT` value
///
/// Unset and empty both fall back to [`DEFAULT_PORT`].
pub fn resolve_port(value: Option<&str>) -> Result<u16> {
    match value {
        None | Some("") => {
            tracing::debug!("{} not set, using default port {}", PORT_ENV_VAR, DEFAULT_PORT);
            Ok(DEFAULT_PORT)
        }
        Some(raw) => raw.parse::<u16>().map_err(|e| {
            Error::Config(format!("invalid {} value {:?}: {}", PORT_ENV_VAR, raw, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_port_unset_uses_default() {
        assert_eq!(resolve_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_resolve_port_empty_uses_default() {
        assert_eq!(resolve_port(Some("")).unwrap(), 8080);
    }

    #[test]
    fn test_resolve_port_explicit() {
        assert_eq!(resolve_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn test_resolve_port_rejects_garbage() {
        let err = resolve_port(Some("eighty")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_resolve_port_rejects_out_of_range() {
        assert!(resolve_port(Some("70000")).is_err());
    }

    #[test]
    fn test_bind_addr_all_interfaces() {
        let config = ServerConfig {
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
    }
}
