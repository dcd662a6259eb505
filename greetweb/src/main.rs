//! greetweb crate entrypoint.
//!
//! Installs the log subscriber, starts the Tokio runtime and launches the
//! web server defined in the `server` module. Keep this file minimal;
//! application logic lives in `server`, `config`, and the `greetviews`
//! crate.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    server::run().await;
}
