//! Configuration module for the BEGLES data core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Built-in manager credentials, used when no environment override is set.
///
/// These gate which UI surface renders. They are not a security boundary:
/// every document stays readable and writable in the client runtime
/// regardless of the gate's mode.
pub const DEFAULT_ADMIN_ID: &str = "begles_manager";
pub const DEFAULT_ADMIN_SECRET: &str = "BMB9696!";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Manager sign-in identifier
    pub admin_id: String,
    /// Manager sign-in secret
    pub admin_secret: String,
    /// Path to the SQLite file backing the persisted slots
    pub store_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_id =
            env::var("BEGLES_ADMIN_ID").unwrap_or_else(|_| DEFAULT_ADMIN_ID.to_string());

        let admin_secret =
            env::var("BEGLES_ADMIN_SECRET").unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string());

        let store_path = env::var("BEGLES_STORE_PATH")
            .unwrap_or_else(|_| "./data/begles.sqlite".to_string())
            .into();

        let log_level = env::var("BEGLES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            admin_id,
            admin_secret,
            store_path,
            log_level,
        }
    }

    /// True when the compiled-in credential pair is in use.
    pub fn uses_default_credentials(&self) -> bool {
        self.admin_id == DEFAULT_ADMIN_ID && self.admin_secret == DEFAULT_ADMIN_SECRET
    }
}
