//! Manga synopsis service.
//!
//! Wraps the [`synopsis_resolver`] engine in a small HTTP service:
//! `GET /manga-news/{title}` resolves a free-text title to its Manga-News
//! series page and returns the synopsis as JSON.
//!
//! # Architecture
//!
//! - **Config**: TOML file with `[server]`, `[logging]` and `[resolver]` tables
//! - **Server**: axum router served from a background tokio task
//! - **Resolver**: search, fuzzy matching, direct probes and synopsis
//!   extraction live in the `synopsis-resolver` workspace crate

pub mod config;
pub mod error;
pub mod server;

pub use config::{LoggingConfig, ServerConfig, ServiceConfig};
pub use error::{Result, ServiceError};
pub use server::SynopsisServer;
pub use synopsis_resolver::{Resolution, ResolverConfig, SynopsisOutcome};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
