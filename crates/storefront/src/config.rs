//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//!
//! - `SERVEX_DATA_DIR` - Directory for the storage blob (default: `./data`)
//! - `SERVEX_LOGIN_DELAY_MS` - Simulated login latency (default: 1000)
//! - `SERVEX_REGISTER_DELAY_MS` - Simulated register latency (default: 1500)
//! - `SERVEX_PAYMENT_DELAY_MS` - Simulated payment latency (default: 2000)
//!
//! The delays stand in for a backend that does not exist; they are
//! configurable so the CLI can feel realistic while tests run at zero.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// File name of the key-value blob inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but not a valid integer.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the storage blob.
    pub data_dir: PathBuf,
    /// Simulated-latency settings for the stub backend calls.
    pub delays: SimulatedDelays,
}

/// Simulated latencies for operations that pretend to hit a backend.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelays {
    /// Wait inside `login` before the identity resolves.
    pub login: Duration,
    /// Wait inside `register` before the identity resolves.
    pub register: Duration,
    /// Wait inside `submit_payment` before the confirmation resolves.
    pub payment: Duration,
}

impl SimulatedDelays {
    /// The production delays: 1000 / 1500 / 2000 ms.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            login: Duration::from_millis(1000),
            register: Duration::from_millis(1500),
            payment: Duration::from_millis(2000),
        }
    }

    /// No delays at all, for tests that don't exercise timing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            register: Duration::ZERO,
            payment: Duration::ZERO,
        }
    }
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self::standard()
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a delay override is set but
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var("SERVEX_DATA_DIR")
            .map_or_else(|_| PathBuf::from("./data"), PathBuf::from);

        let standard = SimulatedDelays::standard();
        let delays = SimulatedDelays {
            login: delay_from_env("SERVEX_LOGIN_DELAY_MS", standard.login)?,
            register: delay_from_env("SERVEX_REGISTER_DELAY_MS", standard.register)?,
            payment: delay_from_env("SERVEX_PAYMENT_DELAY_MS", standard.payment)?,
        };

        Ok(Self { data_dir, delays })
    }

    /// Path of the key-value blob file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            delays: SimulatedDelays::standard(),
        }
    }
}

fn delay_from_env(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
