//! Runtime configuration
//!
//! Read once from environment variables at startup.

use tracing_subscriber::EnvFilter;

use crate::models::DEFAULT_GOAL_DELTA;

/// Default tracing directive when DIET_LOG is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "personal_diet=info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Default tracing directive, added on top of RUST_LOG
    pub log_directive: String,
    /// kcal between maintenance and the loss/gain targets
    pub goal_delta: f64,
    /// Variables that were set but ignored, with their raw values
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            goal_delta: DEFAULT_GOAL_DELTA,
            rejected: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load from DIET_LOG and DIET_GOAL_DELTA
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(directive) = lookup("DIET_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.log_directive = directive;
        }

        if let Some(raw) = lookup("DIET_GOAL_DELTA") {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => config.goal_delta = v,
                _ => config.rejected.push(("DIET_GOAL_DELTA", raw)),
            }
        }

        config
    }

    /// Install the global tracing subscriber, writing to stderr
    ///
    /// Ignored variables are reported once the subscriber is live.
    pub fn init_tracing(&self) -> Result<(), Box<dyn std::error::Error>> {
        let filter = EnvFilter::from_default_env().add_directive(self.log_directive.parse()?);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        for (key, raw) in &self.rejected {
            tracing::warn!("Ignoring {}='{}', using {}", key, raw, self.goal_delta);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().goal_delta, 500.0);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[("DIET_LOG", "personal_diet=debug"), ("DIET_GOAL_DELTA", "250")]);
        assert_eq!(cfg.log_directive, "personal_diet=debug");
        assert_eq!(cfg.goal_delta, 250.0);
    }

    #[test]
    fn test_invalid_goal_delta_falls_back() {
        assert_eq!(config(&[("DIET_GOAL_DELTA", "lots")]).goal_delta, 500.0);
        assert_eq!(config(&[("DIET_LOG", "  ")]).log_directive, DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn test_rejected_goal_delta_is_recorded() {
        let cfg = config(&[("DIET_GOAL_DELTA", "-10")]);
        assert_eq!(cfg.goal_delta, 500.0);
        assert_eq!(cfg.rejected, vec![("DIET_GOAL_DELTA", "-10".to_string())]);

        assert!(config(&[("DIET_GOAL_DELTA", "250")]).rejected.is_empty());
        assert!(config(&[]).rejected.is_empty());
    }
}
