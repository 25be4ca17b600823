//! Server configuration.
//!
//! Loads configuration from environment variables with defaults. Every
//! setting can be overridden via an `ENGN_*` variable; `PORT` is honored for
//! hosting platforms that inject it.

use std::net::SocketAddr;
use std::path::PathBuf;

use engn_core::schema::SchemaVariant;

/// Default port, matching the front-end dev proxy.
const DEFAULT_PORT: u16 = 3000;

/// Default request body limit (100 KiB).
const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Default cap on in-flight `/api/leads` requests.
const DEFAULT_INTAKE_CONCURRENCY: usize = 64;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter used when `RUST_LOG` is unset (e.g. `info`, `debug`).
    pub log_level: String,
    /// Directory holding the built front-end (`index.html` plus assets).
    pub static_dir: PathBuf,
    /// Rules applied to `POST /api/leads` bodies.
    pub lead_schema: SchemaVariant,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Maximum concurrent requests on `/api/leads`.
    pub intake_concurrency: usize,
}

/// An environment variable held a value the server cannot use.
#[derive(Debug, thiserror::Error)]
#[error("invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            log_level: "info".to_owned(),
            static_dir: PathBuf::from("./dist"),
            lead_schema: SchemaVariant::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            intake_concurrency: DEFAULT_INTAKE_CONCURRENCY,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `ENGN_BIND_ADDR`: full bind address (overrides `PORT`)
    /// - `PORT`: port to bind on `0.0.0.0` (default: `3000`)
    /// - `ENGN_LOG_LEVEL`: log filter (default: `info`)
    /// - `ENGN_STATIC_DIR`: built front-end directory (default: `./dist`)
    /// - `ENGN_LEAD_SCHEMA`: `contact` or `standard` (default: `contact`)
    /// - `ENGN_MAX_BODY_BYTES`: request body limit (default: `102400`)
    /// - `ENGN_INTAKE_CONCURRENCY`: in-flight `/api/leads` cap (default: `64`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        // Priority: ENGN_BIND_ADDR > PORT > default 0.0.0.0:3000
        let bind_addr = if let Some(addr) = lookup("ENGN_BIND_ADDR") {
            parse_var("ENGN_BIND_ADDR", &addr)?
        } else if let Some(port) = lookup("PORT") {
            let port: u16 = parse_var("PORT", &port)?;
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            defaults.bind_addr
        };

        let log_level = lookup("ENGN_LOG_LEVEL").unwrap_or(defaults.log_level);

        let static_dir = lookup("ENGN_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let lead_schema = match lookup("ENGN_LEAD_SCHEMA") {
            Some(v) => parse_var("ENGN_LEAD_SCHEMA", &v)?,
            None => defaults.lead_schema,
        };

        let max_body_bytes = match lookup("ENGN_MAX_BODY_BYTES") {
            Some(v) => positive("ENGN_MAX_BODY_BYTES", &v)?,
            None => defaults.max_body_bytes,
        };

        let intake_concurrency = match lookup("ENGN_INTAKE_CONCURRENCY") {
            Some(v) => positive("ENGN_INTAKE_CONCURRENCY", &v)?,
            None => defaults.intake_concurrency,
        };

        Ok(Self {
            bind_addr,
            log_level,
            static_dir,
            lead_schema,
            max_body_bytes,
            intake_concurrency,
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

fn positive(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    match parse_var::<usize>(var, value)? {
        0 => Err(ConfigError {
            var,
            value: value.to_owned(),
            reason: "must be greater than zero".to_owned(),
        }),
        n => Ok(n),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn port_binds_all_interfaces() {
        let config = load(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn bind_addr_overrides_port() {
        let config = load(&[("PORT", "8080"), ("ENGN_BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn schema_variant_is_read() {
        let config = load(&[("ENGN_LEAD_SCHEMA", "standard")]).unwrap();
        assert_eq!(config.lead_schema, SchemaVariant::Standard);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");

        let err = load(&[("ENGN_LEAD_SCHEMA", "loose")]).unwrap_err();
        assert_eq!(err.var, "ENGN_LEAD_SCHEMA");

        let err = load(&[("ENGN_INTAKE_CONCURRENCY", "0")]).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
