//! gamesite library crate.
//!
//! A minimal web application: one page template rendered on `/` and
//! `/index`, served under a development live-reload layer. Most logic
//! lives in `server`; `config` and `templates` hold the settings and the
//! page environment.

/// Configuration management and settings
pub mod config;
/// HTTP server implementation and request handling
pub mod server;
/// Template environment and page rendering
pub mod templates;
