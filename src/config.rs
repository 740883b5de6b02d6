//! Configuration loader and defaults for the gamesite server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). Fields cover the listen
//! address (`host`, `port`) and the development `debug` switch.

use std::env;

use once_cell::sync::Lazy;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5500;
// Development skeleton: debug stays on unless explicitly disabled.
const DEFAULT_DEBUG: bool = true;

/// Application configuration containing the listen address and debug switch
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Debug mode: enables live-reload and verbose error pages
    pub debug: bool,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    host: env::var("GAMESITE_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: parse_port(env::var("GAMESITE_PORT").ok()),
    debug: parse_debug(env::var("GAMESITE_DEBUG").ok()),
});

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT)
}

fn parse_debug(raw: Option<String>) -> bool {
    match raw.as_deref().map(str::trim).map(str::to_ascii_lowercase) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => DEFAULT_DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_to_default() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("not-a-port".into())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".into())), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_valid_values() {
        assert_eq!(parse_port(Some("8080".into())), 8080);
    }

    #[test]
    fn debug_accepts_common_spellings() {
        assert!(parse_debug(Some("1".into())));
        assert!(parse_debug(Some("TRUE".into())));
        assert!(parse_debug(Some(" on ".into())));
        assert!(!parse_debug(Some("0".into())));
        assert!(!parse_debug(Some("False".into())));
    }

    #[test]
    fn debug_defaults_on_for_absent_or_garbage() {
        assert_eq!(parse_debug(None), DEFAULT_DEBUG);
        assert_eq!(parse_debug(Some("maybe".into())), DEFAULT_DEBUG);
    }
}
