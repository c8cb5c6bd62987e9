//! Session configuration decoded from terminal launch parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Default startup banner text.
pub const DEFAULT_BOOT_BANNER: &str = "System initialized successfully! 🚀";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Cosmetic identity and timing knobs for one terminal session.
pub struct SessionConfig {
    /// User name shown in the prompt.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Absolute path `~` expands to.
    pub home: String,
    /// Initial cosmetic working path.
    pub cwd: String,
    /// Banner typed out after boot; `None` disables it.
    pub boot_banner: Option<String>,
    /// Delay before the banner appears.
    pub boot_delay_ms: u32,
    /// Per-character typewriter interval for banner entries.
    pub typewriter_interval_ms: u32,
    /// Drop pending delayed output when the log is cleared.
    pub cancel_pending_on_clear: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: "jonathan".to_string(),
            host: "portfolio".to_string(),
            home: "/home/jonathan".to_string(),
            cwd: "~".to_string(),
            boot_banner: Some(DEFAULT_BOOT_BANNER.to_string()),
            boot_delay_ms: 1000,
            typewriter_interval_ms: 50,
            cancel_pending_on_clear: false,
        }
    }
}

impl SessionConfig {
    /// Decodes launch parameters. `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `params` is not an object of known fields.
    pub fn from_launch_params(params: &Value) -> Result<Self, ConfigError> {
        if params.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(params.clone())?)
    }

    /// Prompt prefix, for example `jonathan@portfolio:~$`.
    pub fn prompt(&self, cwd: &str) -> String {
        format!("{}@{}:{}$", self.user, self.host, cwd)
    }

    /// Expands a cosmetic working path to an absolute one.
    pub fn absolute_path(&self, cwd: &str) -> String {
        match cwd.strip_prefix('~') {
            Some(rest) => format!("{}{}", self.home, rest),
            None => cwd.to_string(),
        }
    }
}
