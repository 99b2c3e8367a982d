//! Environment-driven configuration.

use std::env;
use std::time::Duration;

/// Runtime settings, read once at startup. Unset or malformed variables fall
/// back to defaults.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Search depth in plies (`CHESS_AI_DEPTH`).
    pub ai_depth: u32,
    /// Per-search time budget in milliseconds (`CHESS_AI_TIMEOUT`).
    pub ai_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_depth: 3,
            ai_timeout_ms: 5_000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            ai_depth: parse_var("CHESS_AI_DEPTH", defaults.ai_depth),
            ai_timeout_ms: parse_var("CHESS_AI_TIMEOUT", defaults.ai_timeout_ms),
        }
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_millis(self.ai_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
