//! Configuration resolution from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::LauncherConfig;

/// Name of the environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a base-10 integer in the valid port range.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// `PORT` is set but is not valid Unicode.
    #[error("PORT is not valid unicode")]
    NotUnicode,
}

impl LauncherConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Reads `PORT` exactly once. Absence falls back to the default port;
    /// a value that does not parse as a port is fatal to startup, before
    /// any socket is bound.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(PORT_VAR) {
            Some(raw) => {
                let raw = raw.to_str().ok_or(ConfigError::NotUnicode)?;
                Ok(Self {
                    port: parse_port(raw)?,
                })
            }
            None => Ok(Self::default()),
        }
    }
}

/// Parse a port value the way `from_env` does, without touching the
/// environment.
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidPort {
        value: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_PORT;

    #[test]
    fn parses_integer_ports() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port("8000").unwrap(), 8000);
        assert_eq!(parse_port("0").unwrap(), 0);
        assert_eq!(parse_port("65535").unwrap(), 65535);
    }

    #[test]
    fn rejects_non_integer_ports() {
        assert!(parse_port("abc").is_err());
        assert!(parse_port("").is_err());
        assert!(parse_port("80.0").is_err());
        assert!(parse_port(" 8000").is_err());

        let message = parse_port("abc").unwrap_err().to_string();
        assert!(message.contains("invalid PORT value"));
    }

    #[test]
    fn rejects_out_of_range_ports() {
        assert!(parse_port("70000").is_err());
        assert!(parse_port("-1").is_err());
    }

    // Mutating PORT is process-global, so every from_env case lives in one
    // test to keep the suite parallel-safe.
    #[test]
    fn from_env_resolves_port() {
        std::env::remove_var(PORT_VAR);
        assert_eq!(LauncherConfig::from_env().unwrap().port, DEFAULT_PORT);

        std::env::set_var(PORT_VAR, "3000");
        assert_eq!(LauncherConfig::from_env().unwrap().port, 3000);

        std::env::set_var(PORT_VAR, "abc");
        assert!(LauncherConfig::from_env().is_err());

        std::env::remove_var(PORT_VAR);
    }
}
