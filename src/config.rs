use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DNS_TIMEOUT_SECS: u64 = 2;
const DEFAULT_DNS_ATTEMPTS: usize = 2;
const DEFAULT_DNS_CONCURRENCY: usize = 16;

/// # Application Configuration
///
/// Server and resolver settings read from the environment (after `.env` is
/// loaded by `main`).
///
/// | variable           | default     |
/// |--------------------|-------------|
/// | `HOST`             | `127.0.0.1` |
/// | `PORT`             | `3000`      |
/// | `DNS_TIMEOUT_SECS` | `2`         |
/// | `DNS_ATTEMPTS`     | `2`         |
/// | `DNS_IMPLICIT_MX`  | `false`     |
/// | `DNS_CONCURRENCY`  | `16`        |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dns: DnsConfig,
}

/// Resolver options for the DNS-backed domain checker.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsConfig {
    pub timeout: Duration,
    pub attempts: usize,
    /// Accept A/AAAA records as an implicit mail exchanger when no MX exists.
    pub implicit_mx: bool,
    /// Upper bound on MX queries in flight for one batch. Never zero.
    pub concurrency: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS),
            attempts: DEFAULT_DNS_ATTEMPTS,
            implicit_mx: false,
            concurrency: DEFAULT_DNS_CONCURRENCY,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dns: DnsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let timeout_secs = parse_or(&lookup, "DNS_TIMEOUT_SECS", DEFAULT_DNS_TIMEOUT_SECS)?;
        let attempts = parse_or(&lookup, "DNS_ATTEMPTS", defaults.dns.attempts)?;
        let implicit_mx = match lookup("DNS_IMPLICIT_MX") {
            Some(raw) => parse_flag("DNS_IMPLICIT_MX", &raw)?,
            None => defaults.dns.implicit_mx,
        };
        let concurrency = parse_or(&lookup, "DNS_CONCURRENCY", defaults.dns.concurrency)?;
        if concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DNS_CONCURRENCY",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            dns: DnsConfig {
                timeout: Duration::from_secs(timeout_secs),
                attempts,
                implicit_mx,
                concurrency,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
