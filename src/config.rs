use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparsable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: parse_or(&lookup, "HOST", DEFAULT_HOST),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr(), SocketAddr::from(([0, 0, 0, 0], 5000)));
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/users"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.database_url, "postgres://localhost/users");
        assert_eq!(config.listen_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("PORT", "eighty"), ("DATABASE_URL", "  ")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
