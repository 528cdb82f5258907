//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Resolved launcher configuration.
///
/// Carries the single value the launcher owns: the listen port. Resolved
/// once at startup, never mutated, and passed explicitly to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// TCP port the server binds on `0.0.0.0`. Port `0` requests an
    /// OS-assigned ephemeral port.
    pub port: u16,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_8000() {
        assert_eq!(LauncherConfig::default().port, 8000);
        assert_eq!(DEFAULT_PORT, 8000);
    }
}
