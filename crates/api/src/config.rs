use std::net::SocketAddr;

use anyhow::{Context, Result};
use chrono::Duration;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 480;
/// Upper bound for `AFLOW_SESSION_TTL_MINUTES` (30 days).
pub const MAX_SESSION_TTL_MINUTES: i64 = 30 * 24 * 60;

/// API server configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub session_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        }
    }
}

impl ApiConfig {
    /// Read `AFLOW_BIND` and `AFLOW_SESSION_TTL_MINUTES`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("AFLOW_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse AFLOW_BIND")?;

        let ttl_minutes: i64 = match lookup("AFLOW_SESSION_TTL_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("parse AFLOW_SESSION_TTL_MINUTES: {raw}"))?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&ttl_minutes) {
            anyhow::bail!(
                "AFLOW_SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {ttl_minutes}"
            );
        }
        let session_ttl = Duration::try_minutes(ttl_minutes)
            .with_context(|| format!("AFLOW_SESSION_TTL_MINUTES out of range: {ttl_minutes}"))?;

        Ok(Self {
            bind_addr,
            session_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(cfg.session_ttl, Duration::minutes(480));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("AFLOW_BIND", "127.0.0.1:3000"),
            ("AFLOW_SESSION_TTL_MINUTES", "15"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.session_ttl, Duration::minutes(15));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(ApiConfig::from_lookup(lookup(&[("AFLOW_BIND", "nowhere")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("AFLOW_SESSION_TTL_MINUTES", "abc")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("AFLOW_SESSION_TTL_MINUTES", "0")])).is_err());
    }

    #[test]
    fn oversized_ttl_is_rejected_not_panicking() {
        let max = i64::MAX.to_string();
        for raw in ["1000000000000", max.as_str(), "43201"] {
            let err = ApiConfig::from_lookup(lookup(&[("AFLOW_SESSION_TTL_MINUTES", raw)]))
                .unwrap_err();
            assert!(err.to_string().contains("AFLOW_SESSION_TTL_MINUTES"), "{err}");
        }

        let cfg = ApiConfig::from_lookup(lookup(&[("AFLOW_SESSION_TTL_MINUTES", "43200")])).unwrap();
        assert_eq!(cfg.session_ttl, Duration::days(30));
    }
}
