//! Runtime configuration read from the environment (and an optional `.env`)

use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;

pub const STORAGE_DIR_VAR: &str = "NIATUNES_STORAGE_DIR";
pub const LOG_DIR_VAR: &str = "NIATUNES_LOG_DIR";
pub const LATENCY_SCALE_VAR: &str = "NIATUNES_LATENCY_SCALE";
pub const TICK_MS_VAR: &str = "NIATUNES_TICK_MS";

const DEFAULT_STORAGE_DIR: &str = ".cache";
const DEFAULT_LOG_DIR: &str = ".logs";
const DEFAULT_LATENCY_SCALE: f64 = 1.0;
const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where the session snapshots live
    pub storage_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Multiplier applied to every simulated API delay
    pub latency_scale: f64,
    /// Playback clock period
    pub tick: Duration,
    /// Variables that were set but could not be parsed, with their raw value
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            latency_scale: DEFAULT_LATENCY_SCALE,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            rejected: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(STORAGE_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(LOG_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(LATENCY_SCALE_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(scale) if scale.is_finite() && scale >= 0.0 => config.latency_scale = scale,
                _ => config.rejected.push((LATENCY_SCALE_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(TICK_MS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.tick = Duration::from_millis(ms),
                _ => config.rejected.push((TICK_MS_VAR, raw)),
            }
        }

        config
    }

    /// Log the effective settings. Called once logging is up.
    pub fn report(&self) {
        for (var, raw) in &self.rejected {
            tracing::warn!(var, value = %raw, "Ignoring invalid config value, using default");
        }
        tracing::info!(
            storage_dir = %self.storage_dir.display(),
            log_dir = %self.log_dir.display(),
            latency_scale = self.latency_scale,
            tick_ms = self.tick.as_millis() as u64,
            "Configuration loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick, Duration::from_secs(1));
        assert_eq!(config.storage_dir, PathBuf::from(".cache"));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (STORAGE_DIR_VAR, "/tmp/nia"),
            (LOG_DIR_VAR, "/tmp/nia-logs"),
            (LATENCY_SCALE_VAR, "0"),
            (TICK_MS_VAR, "250"),
        ]);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/nia"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/nia-logs"));
        assert_eq!(config.latency_scale, 0.0);
        assert_eq!(config.tick, Duration::from_millis(250));
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[(LATENCY_SCALE_VAR, "fast"), (TICK_MS_VAR, "0")]);
        assert_eq!(config.latency_scale, 1.0);
        assert_eq!(config.tick, Duration::from_millis(1000));
        assert_eq!(config.rejected.len(), 2);
        assert_eq!(config.rejected[0], (LATENCY_SCALE_VAR, "fast".to_string()));
    }

    #[test]
    fn negative_scale_is_rejected() {
        let config = config_from(&[(LATENCY_SCALE_VAR, "-2")]);
        assert_eq!(config.latency_scale, 1.0);
    }
}
