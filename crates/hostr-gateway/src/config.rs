//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8000").
    pub bind_addr: String,

    /// Base serving domain. Requests must arrive on `<npub>.<domain>`.
    pub domain: String,

    /// Relay websocket URL queried for filemap events.
    pub relay_url: String,

    /// Blossom server base URL. Blobs are fetched as `<blossom_url>/<digest>`.
    pub blossom_url: String,

    /// Event kind identifying filemap events on the relay.
    pub filemap_kind: u16,

    /// Timeout for a single relay query.
    pub relay_timeout: Duration,

    /// Timeout for a single Blossom fetch.
    pub fetch_timeout: Duration,
}

/// Default filemap event kind (addressable event range).
const DEFAULT_FILEMAP_KIND: u16 = 34128;

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `HOSTR_DOMAIN`: Base serving domain (e.g., "example.com")
    /// - `HOSTR_RELAY_URL`: Relay websocket URL (e.g., "wss://relay.damus.io")
    /// - `HOSTR_BLOSSOM_URL`: Blossom server base URL
    ///
    /// Optional:
    /// - `HOSTR_BIND_ADDR`: Server bind address (default: "0.0.0.0:8000")
    /// - `HOSTR_FILEMAP_KIND`: Filemap event kind (default: 34128)
    /// - `HOSTR_RELAY_TIMEOUT_SECS`: Relay query timeout (default: 10)
    /// - `HOSTR_FETCH_TIMEOUT_SECS`: Blossom fetch timeout (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("HOSTR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let domain = std::env::var("HOSTR_DOMAIN")
            .context("HOSTR_DOMAIN must be set to the base serving domain")?
            .trim()
            .trim_matches('.')
            .to_string();

        let relay_url = std::env::var("HOSTR_RELAY_URL")
            .context("HOSTR_RELAY_URL must be set to the relay websocket URL")?;

        let blossom_url = std::env::var("HOSTR_BLOSSOM_URL")
            .context("HOSTR_BLOSSOM_URL must be set to the Blossom server base URL")?
            .trim_end_matches('/')
            .to_string();

        let filemap_kind = match std::env::var("HOSTR_FILEMAP_KIND") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("HOSTR_FILEMAP_KIND must be a numeric event kind")?,
            Err(_) => DEFAULT_FILEMAP_KIND,
        };

        let relay_timeout = Duration::from_secs(env_secs("HOSTR_RELAY_TIMEOUT_SECS", 10)?);
        let fetch_timeout = Duration::from_secs(env_secs("HOSTR_FETCH_TIMEOUT_SECS", 30)?);

        tracing::info!(
            bind_addr = %bind_addr,
            domain = %domain,
            relay = %relay_url,
            blossom = %blossom_url,
            filemap_kind,
            relay_timeout_secs = relay_timeout.as_secs(),
            fetch_timeout_secs = fetch_timeout.as_secs(),
            "gateway configuration loaded"
        );

        Ok(Self {
            bind_addr,
            domain,
            relay_url,
            blossom_url,
            filemap_kind,
            relay_timeout,
            fetch_timeout,
        })
    }
}

/// Read an integral seconds value from the environment, falling back to a default.
fn env_secs(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a number of seconds")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "HOSTR_BIND_ADDR",
        "HOSTR_DOMAIN",
        "HOSTR_RELAY_URL",
        "HOSTR_BLOSSOM_URL",
        "HOSTR_FILEMAP_KIND",
        "HOSTR_RELAY_TIMEOUT_SECS",
        "HOSTR_FETCH_TIMEOUT_SECS",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("HOSTR_DOMAIN", "example.com"),
        ("HOSTR_RELAY_URL", "wss://relay.example.com"),
        ("HOSTR_BLOSSOM_URL", "https://blossom.example.com"),
    ];

    #[test]
    fn config_defaults() {
        with_env_vars(REQUIRED, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8000");
            assert_eq!(config.domain, "example.com");
            assert_eq!(config.relay_url, "wss://relay.example.com");
            assert_eq!(config.blossom_url, "https://blossom.example.com");
            assert_eq!(config.filemap_kind, 34128);
            assert_eq!(config.relay_timeout, Duration::from_secs(10));
            assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        });
    }

    #[test]
    fn config_missing_domain_fails() {
        with_env_vars(
            &[
                ("HOSTR_RELAY_URL", "wss://relay.example.com"),
                ("HOSTR_BLOSSOM_URL", "https://blossom.example.com"),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("HOSTR_DOMAIN"));
            },
        );
    }

    #[test]
    fn config_missing_relay_fails() {
        with_env_vars(
            &[
                ("HOSTR_DOMAIN", "example.com"),
                ("HOSTR_BLOSSOM_URL", "https://blossom.example.com"),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("HOSTR_RELAY_URL"));
            },
        );
    }

    #[test]
    fn config_missing_blossom_fails() {
        with_env_vars(
            &[
                ("HOSTR_DOMAIN", "example.com"),
                ("HOSTR_RELAY_URL", "wss://relay.example.com"),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("HOSTR_BLOSSOM_URL"));
            },
        );
    }

    #[test]
    fn config_blossom_trailing_slash_stripped() {
        let mut vars = REQUIRED.to_vec();
        vars[2] = ("HOSTR_BLOSSOM_URL", "https://blossom.example.com/");
        with_env_vars(&vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.blossom_url, "https://blossom.example.com");
        });
    }

    #[test]
    fn config_domain_dots_trimmed() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("HOSTR_DOMAIN", ".example.com");
        with_env_vars(&vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.domain, "example.com");
        });
    }

    #[test]
    fn config_custom_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("HOSTR_BIND_ADDR", "127.0.0.1:9090"));
        vars.push(("HOSTR_FILEMAP_KIND", "30563"));
        vars.push(("HOSTR_RELAY_TIMEOUT_SECS", "5"));
        vars.push(("HOSTR_FETCH_TIMEOUT_SECS", "60"));
        with_env_vars(&vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "127.0.0.1:9090");
            assert_eq!(config.filemap_kind, 30563);
            assert_eq!(config.relay_timeout, Duration::from_secs(5));
            assert_eq!(config.fetch_timeout, Duration::from_secs(60));
        });
    }

    #[test]
    fn config_non_numeric_kind_fails() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("HOSTR_FILEMAP_KIND", "filemap"));
        with_env_vars(&vars, || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("HOSTR_FILEMAP_KIND"));
        });
    }

    #[test]
    fn config_non_numeric_timeout_fails() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("HOSTR_RELAY_TIMEOUT_SECS", "soon"));
        with_env_vars(&vars, || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("HOSTR_RELAY_TIMEOUT_SECS"));
        });
    }
}
