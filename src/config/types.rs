use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Behaviour of the in-memory repositories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Artificial delay before every fetch answers, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
    /// Number of initial fetches that fail (per repository).
    #[serde(default)]
    pub fail_first: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Route token of the first screen (default: "main").
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_start_route() -> String {
    Route::MAIN.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_route: default_start_route(),
        }
    }
}

impl RepositoryConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Parsed start route; falls back to the root for unvalidated input.
    pub fn start_route(&self) -> Route {
        self.start_route.parse().unwrap_or(Route::Main)
    }
}
