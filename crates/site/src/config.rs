//! Site configuration: timing windows and layout thresholds.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Tunables for the interaction layer.
///
/// Every field has a default, so a partial JSON document or an empty
/// environment yields a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Quiet period before a filter-control change recomputes the grid.
    pub filter_debounce_ms: u64,
    /// Quiet period before a resize is acted on.
    pub resize_debounce_ms: u64,
    /// Viewport width above which the mobile menu is force-closed.
    pub nav_breakpoint_px: u32,
    /// Simulated contact-form send time.
    pub submit_delay_ms: u64,
    /// How long the success message stays up before the form resets.
    pub success_reset_ms: u64,
    /// Simulated "load more" fetch time.
    pub load_more_delay_ms: u64,
    /// Visible fraction of an image that triggers loading, in [0, 1].
    pub lazy_threshold: f64,
    /// Extra margin around the viewport for lazy-image intersection.
    pub lazy_root_margin_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            filter_debounce_ms: 300,
            resize_debounce_ms: 250,
            nav_breakpoint_px: 768,
            submit_delay_ms: 1500,
            success_reset_ms: 5000,
            load_more_delay_ms: 1500,
            lazy_threshold: 0.1,
            lazy_root_margin_px: 50.0,
        }
    }
}

const ENV_FILTER_DEBOUNCE: &str = "AUTOLOT_FILTER_DEBOUNCE_MS";
const ENV_RESIZE_DEBOUNCE: &str = "AUTOLOT_RESIZE_DEBOUNCE_MS";
const ENV_NAV_BREAKPOINT: &str = "AUTOLOT_NAV_BREAKPOINT_PX";
const ENV_SUBMIT_DELAY: &str = "AUTOLOT_SUBMIT_DELAY_MS";
const ENV_SUCCESS_RESET: &str = "AUTOLOT_SUCCESS_RESET_MS";
const ENV_LOAD_MORE_DELAY: &str = "AUTOLOT_LOAD_MORE_DELAY_MS";
const ENV_LAZY_THRESHOLD: &str = "AUTOLOT_LAZY_THRESHOLD";
const ENV_LAZY_ROOT_MARGIN: &str = "AUTOLOT_LAZY_ROOT_MARGIN_PX";

impl SiteConfig {
    /// Load from `AUTOLOT_*` environment variables.
    ///
    /// Unset variables keep their defaults; unparseable ones are logged and
    /// also keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        override_from(&lookup, ENV_FILTER_DEBOUNCE, &mut cfg.filter_debounce_ms);
        override_from(&lookup, ENV_RESIZE_DEBOUNCE, &mut cfg.resize_debounce_ms);
        override_from(&lookup, ENV_NAV_BREAKPOINT, &mut cfg.nav_breakpoint_px);
        override_from(&lookup, ENV_SUBMIT_DELAY, &mut cfg.submit_delay_ms);
        override_from(&lookup, ENV_SUCCESS_RESET, &mut cfg.success_reset_ms);
        override_from(&lookup, ENV_LOAD_MORE_DELAY, &mut cfg.load_more_delay_ms);
        override_from(&lookup, ENV_LAZY_THRESHOLD, &mut cfg.lazy_threshold);
        override_from(&lookup, ENV_LAZY_ROOT_MARGIN, &mut cfg.lazy_root_margin_px);

        if let Err(err) = cfg.validate() {
            tracing::warn!(%err, "invalid site config from environment; using defaults");
            return Self::default();
        }
        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.lazy_threshold) {
            return Err(ConfigError::Invalid {
                key: "lazy_threshold",
                value: self.lazy_threshold.to_string(),
            });
        }
        if !(self.lazy_root_margin_px.is_finite() && self.lazy_root_margin_px >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "lazy_root_margin_px",
                value: self.lazy_root_margin_px.to_string(),
            });
        }
        Ok(())
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, slot: &mut T)
where
    T: core::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable config value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_page_timings() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.filter_debounce(), Duration::from_millis(300));
        assert_eq!(cfg.resize_debounce(), Duration::from_millis(250));
        assert_eq!(cfg.nav_breakpoint_px, 768);
        assert_eq!(cfg.submit_delay(), Duration::from_millis(1500));
        assert_eq!(cfg.success_reset(), Duration::from_millis(5000));
        assert_eq!(cfg.load_more_delay(), Duration::from_millis(1500));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_overrides_and_ignores_garbage() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            (ENV_FILTER_DEBOUNCE, "120"),
            (ENV_NAV_BREAKPOINT, "wide"),
            (ENV_LAZY_THRESHOLD, " 0.5 "),
        ]));
        assert_eq!(cfg.filter_debounce_ms, 120);
        assert_eq!(cfg.nav_breakpoint_px, 768);
        assert_eq!(cfg.lazy_threshold, 0.5);
    }

    #[test]
    fn out_of_range_env_falls_back_to_defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[(ENV_LAZY_THRESHOLD, "2.0"), (ENV_SUBMIT_DELAY, "10")]));
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn json_fills_missing_fields() {
        let cfg = SiteConfig::from_json(r#"{ "filter_debounce_ms": 50 }"#).unwrap();
        assert_eq!(cfg.filter_debounce_ms, 50);
        assert_eq!(cfg.success_reset_ms, 5000);
    }

    #[test]
    fn json_rejects_bad_threshold() {
        let err = SiteConfig::from_json(r#"{ "lazy_threshold": -0.1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "lazy_threshold", .. }));
        assert!(matches!(SiteConfig::from_json("nope"), Err(ConfigError::Parse(_))));
    }
}
