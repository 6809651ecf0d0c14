//! Runtime configuration read from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use cropwise_ai::DEFAULT_TOP_K;
use cropwise_market::DEFAULT_FALLBACK_PRICE;

pub const BIND_ADDR_VAR: &str = "CROPWISE_BIND_ADDR";
pub const TOP_K_VAR: &str = "CROPWISE_TOP_K";
pub const FALLBACK_PRICE_VAR: &str = "CROPWISE_FALLBACK_PRICE";
pub const MAX_HISTORY_DAYS_VAR: &str = "CROPWISE_MAX_HISTORY_DAYS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_HISTORY_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Recommendations returned by `/predict` unless `top_k` is given.
    pub top_k: usize,
    /// Base price for crops missing from the price table.
    pub fallback_price: f64,
    /// Upper bound on `days` for history and stats requests.
    pub max_history_days: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            top_k: DEFAULT_TOP_K,
            fallback_price: DEFAULT_FALLBACK_PRICE,
            max_history_days: DEFAULT_MAX_HISTORY_DAYS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys use defaults; malformed
    /// or out-of-range values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        if lookup(BIND_ADDR_VAR).is_none() {
            tracing::debug!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
        }

        Self {
            bind_addr: parse_or(&lookup, BIND_ADDR_VAR, defaults.bind_addr, |_| true),
            top_k: parse_or(&lookup, TOP_K_VAR, defaults.top_k, |k| *k >= 1),
            fallback_price: parse_or(&lookup, FALLBACK_PRICE_VAR, defaults.fallback_price, |p| {
                p.is_finite() && *p > 0.0
            }),
            max_history_days: parse_or(
                &lookup,
                MAX_HISTORY_DAYS_VAR,
                defaults.max_history_days,
                |d| *d >= 1,
            ),
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: FromStr + core::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            tracing::warn!("{key}={raw:?} is invalid; using default {default:?}");
            default
        }
    }
}
