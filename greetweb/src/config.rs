//! Configuration loader and defaults for the greetweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields cover the listening address
//! (`host`, `port`).
//!
use std::env;

use once_cell::sync::Lazy;

/// Default interface to bind to
const DEFAULT_HOST: &str = "0.0.0.0";

const DEFAULT_PORT: u16 = 8080;

/// Application configuration containing the listening address
pub struct Config {
    /// Interface the server binds to
    pub host: String,
    /// HTTP port
    pub port: u16,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    host: env::var("GREETWEB_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: env::var("GREETWEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
});
