//! CLI configuration sourced from environment variables.
use std::str::FromStr;

use tokio::time::Duration;
use tracing::warn;

use wolfhunt_core::GameConfig;
use wolfhunt_runtime::RuntimeConfig;

/// Client-side settings, all optional with sensible defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Wolf tick period in milliseconds.
    pub tick_ms: u64,
    /// Fixed game seed for reproducible hunts.
    pub seed: Option<u64>,
    /// Board side length.
    pub grid_size: i32,
}

impl CliConfig {
    pub const DEFAULT_TICK_MS: u64 = 1_000;

    /// Reads `WOLFHUNT_TICK_MS`, `WOLFHUNT_SEED`, and `WOLFHUNT_GRID`.
    /// Unset or malformed variables fall back to defaults with a warning.
    pub fn from_env() -> Self {
        Self {
            tick_ms: env_var("WOLFHUNT_TICK_MS").unwrap_or(Self::DEFAULT_TICK_MS),
            seed: env_var("WOLFHUNT_SEED"),
            grid_size: env_var("WOLFHUNT_GRID").unwrap_or(GameConfig::DEFAULT_GRID_SIZE),
        }
    }

    /// Maps client settings onto the runtime's configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game: GameConfig {
                grid_size: self.grid_size.max(GameConfig::MIN_GRID_SIZE),
                ..GameConfig::default()
            },
            seed: self.seed,
            tick_interval: Duration::from_millis(self.tick_ms.max(1)),
            ..RuntimeConfig::default()
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            seed: None,
            grid_size: GameConfig::DEFAULT_GRID_SIZE,
        }
    }
}

fn env_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring malformed environment variable");
            None
        }
    }
}
