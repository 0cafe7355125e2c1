//! Deployment environment resolution.
//!
//! The deployment mode and public base URL come from process configuration.
//! Reads go through [`ConfigProvider`] so handlers and tests can swap the
//! source without touching real process state. Resolution never fails:
//! missing, empty, or unrecognized values fall back to development on
//! `http://localhost:3000`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::canonical::canonical_url;
use crate::config::{DEFAULT_ENVIRONMENT, DEFAULT_SITE_URL, ENV_VAR_ENVIRONMENT, ENV_VAR_SITE_URL};

/// Source of string configuration values keyed by variable name.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigProvider for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory values.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    values: HashMap<String, String>,
}

impl StaticProvider {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigProvider for StaticProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Consults each provider in order; the first non-empty value wins.
#[derive(Clone, Default)]
pub struct LayeredProvider {
    layers: Vec<Arc<dyn ConfigProvider>>,
}

impl LayeredProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below those already present.
    pub fn with(mut self, layer: impl ConfigProvider + 'static) -> Self {
        self.layers.push(Arc::new(layer));
        self
    }
}

impl ConfigProvider for LayeredProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| non_empty(layer.get(key)))
    }
}

/// Treats an empty string the same as an unset variable.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Exact, case-sensitive match; anything else is development.
    pub fn parse(name: &str) -> Self {
        match name {
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Resolved deployment flags plus base URL. Exactly one flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    pub is_development: bool,
    pub is_staging: bool,
    pub is_production: bool,
    pub site_url: String,
}

impl EnvironmentDescriptor {
    pub fn new(environment: Environment, site_url: impl Into<String>) -> Self {
        Self {
            is_development: environment == Environment::Development,
            is_staging: environment == Environment::Staging,
            is_production: environment == Environment::Production,
            site_url: site_url.into(),
        }
    }

    pub fn environment(&self) -> Environment {
        if self.is_production {
            Environment::Production
        } else if self.is_staging {
            Environment::Staging
        } else {
            Environment::Development
        }
    }

    /// Absolute URL for `path` under this environment's site URL.
    pub fn canonical_url(&self, path: &str) -> String {
        canonical_url(&self.site_url, path)
    }
}

/// Raw configured environment name, or `"development"` when unset.
///
/// Unrecognized names are returned as-is; only the descriptor flags
/// collapse them to development.
pub fn environment_name(provider: &dyn ConfigProvider) -> String {
    non_empty(provider.get(ENV_VAR_ENVIRONMENT)).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Resolve a fresh descriptor from `provider`.
pub fn resolve_environment(provider: &dyn ConfigProvider) -> EnvironmentDescriptor {
    let name = environment_name(provider);
    let site_url =
        non_empty(provider.get(ENV_VAR_SITE_URL)).unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

    EnvironmentDescriptor::new(Environment::parse(&name), site_url)
}

/// Resolve a descriptor from the process environment.
pub fn get_environment() -> EnvironmentDescriptor {
    resolve_environment(&ProcessEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(env: Option<&str>, site_url: Option<&str>) -> StaticProvider {
        let mut p = StaticProvider::default();
        if let Some(env) = env {
            p.set(ENV_VAR_ENVIRONMENT, env);
        }
        if let Some(url) = site_url {
            p.set(ENV_VAR_SITE_URL, url);
        }
        p
    }

    fn flag_count(d: &EnvironmentDescriptor) -> usize {
        [d.is_development, d.is_staging, d.is_production]
            .iter()
            .filter(|f| **f)
            .count()
    }

    #[test]
    fn test_defaults_when_unset() {
        let d = resolve_environment(&provider(None, None));
        assert_eq!(
            d,
            EnvironmentDescriptor {
                is_development: true,
                is_staging: false,
                is_production: false,
                site_url: "http://localhost:3000".to_string(),
            }
        );
    }

    #[test]
    fn test_production() {
        let d = resolve_environment(&provider(Some("production"), None));
        assert!(d.is_production);
        assert!(!d.is_development);
        assert!(!d.is_staging);
        assert_eq!(d.environment(), Environment::Production);
    }

    #[test]
    fn test_staging() {
        let d = resolve_environment(&provider(Some("staging"), Some("https://staging.voluntodo.com")));
        assert!(d.is_staging);
        assert_eq!(flag_count(&d), 1);
        assert_eq!(d.site_url, "https://staging.voluntodo.com");
    }

    #[test]
    fn test_unrecognized_falls_back_to_development() {
        for name in ["prod", "Production", "test", " production"] {
            let d = resolve_environment(&provider(Some(name), None));
            assert!(d.is_development, "{name} should resolve to development");
            assert_eq!(flag_count(&d), 1);
        }
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let d = resolve_environment(&provider(Some(""), Some("")));
        assert!(d.is_development);
        assert_eq!(d.site_url, DEFAULT_SITE_URL);
        assert_eq!(environment_name(&provider(Some(""), None)), "development");
    }

    #[test]
    fn test_environment_name_keeps_raw_value() {
        assert_eq!(environment_name(&provider(Some("qa"), None)), "qa");
        assert_eq!(environment_name(&provider(None, None)), "development");
    }

    #[test]
    fn test_layered_provider_order() {
        let layered = LayeredProvider::new()
            .with(provider(Some(""), None))
            .with(provider(Some("staging"), Some("https://a.example")))
            .with(provider(Some("production"), Some("https://b.example")));
        let d = resolve_environment(&layered);
        assert!(d.is_staging);
        assert_eq!(d.site_url, "https://a.example");
    }

    #[test]
    fn test_layered_provider_empty() {
        assert_eq!(LayeredProvider::new().get(ENV_VAR_SITE_URL), None);
    }

    #[test]
    fn test_environment_round_trip() {
        for env in [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::parse(env.as_str()), env);
            assert_eq!(EnvironmentDescriptor::new(env, DEFAULT_SITE_URL).environment(), env);
        }
    }

    #[test]
    fn test_get_environment_sets_exactly_one_flag() {
        let d = get_environment();
        assert_eq!(flag_count(&d), 1);
        assert!(!d.site_url.is_empty());
    }

    #[test]
    fn test_descriptor_canonical_url() {
        let d = EnvironmentDescriptor::new(Environment::Production, "https://app.voluntodo.com/");
        assert_eq!(d.canonical_url("og-image.png"), "https://app.voluntodo.com/og-image.png");
    }
}
