//! Runtime configuration read from environment variables.
//!
//! | Variable             | Default   |
//! |----------------------|-----------|
//! | `PORT`               | `3000`    |
//! | `BIND_ADDR`          | `0.0.0.0` |
//! | `EXPORT_DIR`         | `dist`    |
//! | `CACHE_TTL_SECS`     | `300`     |
//! | `CACHE_CAPACITY`     | `256`     |
//! | `WIDE_LAYOUT_MIN_PX` | `768`     |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Viewport width (px) from which the expanding cards lay out as columns.
pub const DEFAULT_WIDE_LAYOUT_MIN_PX: u32 = 768;

#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub export_dir: PathBuf,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
    pub wide_layout_min_px: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            export_dir: PathBuf::from("dist"),
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 256,
            wide_layout_min_px: DEFAULT_WIDE_LAYOUT_MIN_PX,
        }
    }
}

impl SiteConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary key lookup. Unparseable values keep
    /// their default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let export_dir = lookup("EXPORT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr),
            export_dir,
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )),
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.cache_capacity),
            wide_layout_min_px: parse_or(&lookup, "WIDE_LAYOUT_MIN_PX", defaults.wide_layout_min_px),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.export_dir, PathBuf::from("dist"));
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.wide_layout_min_px, 768);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("EXPORT_DIR", "/tmp/site"),
            ("CACHE_TTL_SECS", "60"),
            ("WIDE_LAYOUT_MIN_PX", "1024"),
        ]));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/site"));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.wide_layout_min_px, 1024);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("CACHE_CAPACITY", "-3"),
            ("EXPORT_DIR", "   "),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_capacity, 256);
        assert_eq!(config.export_dir, PathBuf::from("dist"));
    }
}
