//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FOOD_FRENZY_SESSION_DIR` - Directory holding the persisted session (default: .foodfrenzy)
//! - `FOOD_FRENZY_CHANNEL_BUFFER` - Mailbox size of each backend actor (default: 100)
//! - `FOOD_FRENZY_SEED_DEMO_ORDERS` - Preload the demo orders (default: true)
//! - `FOOD_FRENZY_ADMIN_EMAIL` - Email the mock auth provider treats as admin
//!   (default: admin@foodfrenzy.com)
//! - `RUST_LOG` - Log filter, read by [`setup_tracing`](super::setup_tracing)

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::DEFAULT_ADMIN_EMAIL;

const DEFAULT_SESSION_DIR: &str = ".foodfrenzy";
const DEFAULT_CHANNEL_BUFFER: usize = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub session_dir: PathBuf,
    pub channel_buffer: usize,
    pub seed_demo_orders: bool,
    pub admin_email: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            seed_demo_orders: true,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let session_dir = lookup("FOOD_FRENZY_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_dir);

        let channel_buffer = match lookup("FOOD_FRENZY_CHANNEL_BUFFER") {
            Some(raw) => parse_channel_buffer(&raw)?,
            None => defaults.channel_buffer,
        };

        let seed_demo_orders = match lookup("FOOD_FRENZY_SEED_DEMO_ORDERS") {
            Some(raw) => parse_bool("FOOD_FRENZY_SEED_DEMO_ORDERS", &raw)?,
            None => defaults.seed_demo_orders,
        };

        let admin_email = lookup("FOOD_FRENZY_ADMIN_EMAIL")
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .unwrap_or(defaults.admin_email);

        Ok(Self {
            session_dir,
            channel_buffer,
            seed_demo_orders,
            admin_email,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_channel_buffer(raw: &str) -> Result<usize, ConfigError> {
    let key = "FOOD_FRENZY_CHANNEL_BUFFER";
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    // tokio's mpsc::channel panics on zero capacity.
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {:?}", other),
        )),
    }
}
