//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache TTLs, environment variable names and their defaults, logging
//! format, and default paths. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::environment::StaticProvider;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control values for upstream caches (CDNs, reverse proxies), in seconds.
// The landing page is static apart from metadata that only changes on redeploy.

/// Landing page - content only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 300;
pub const HTTP_CACHE_HOME_SWR: u32 = 60;

/// Static assets (CSS, icons) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Error responses - short TTL so a fixed deploy is picked up quickly
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

/// Stale-if-error duration (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

/// Health probes must always reach the process
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Deployment Environment
// =============================================================================

/// Environment variable naming the deployment environment
pub const ENV_VAR_ENVIRONMENT: &str = "NEXT_PUBLIC_ENV";

/// Environment variable holding the public base URL of the site
pub const ENV_VAR_SITE_URL: &str = "NEXT_PUBLIC_SITE_URL";

/// Environment name used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Base URL used when none is configured
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Version reported by the health endpoint
pub const HEALTH_VERSION: &str = "1.0.0";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default directory holding Tera templates
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default directory for static files
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "voluntodo=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default port for the HTTP to HTTPS redirect listener
pub const DEFAULT_REDIRECT_PORT: u16 = 80;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Fallback site settings, overridden by the process environment
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

/// How the listener terminates TLS
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, for development or behind a TLS-terminating proxy
    #[default]
    None,
    /// Certificate and key loaded from PEM files
    Manual,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    /// Spawn a plain HTTP listener that redirects to HTTPS
    #[serde(default)]
    pub redirect_http: bool,
    #[serde(default = "TlsConfig::default_redirect_port")]
    pub redirect_port: u16,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            mode: TlsMode::None,
            cert_path: None,
            key_path: None,
            redirect_http: false,
            redirect_port: DEFAULT_REDIRECT_PORT,
        }
    }
}

impl TlsConfig {
    fn default_redirect_port() -> u16 {
        DEFAULT_REDIRECT_PORT
    }
}

/// Site values used when the matching environment variable is unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    pub environment: Option<String>,
    pub site_url: Option<String>,
}

impl SiteConfig {
    /// Expose the configured values under their environment variable names,
    /// so they can sit beneath the process environment in a provider chain.
    pub fn as_provider(&self) -> StaticProvider {
        let mut provider = StaticProvider::default();
        if let Some(environment) = &self.environment {
            provider.set(ENV_VAR_ENVIRONMENT, environment);
        }
        if let Some(site_url) = &self.site_url {
            provider.set(ENV_VAR_SITE_URL, site_url);
        }
        provider
    }
}

/// Locations of templates and static assets
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "ThemeConfig::default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "ThemeConfig::default_static_dir")]
    pub static_dir: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            templates_dir: Self::default_templates_dir(),
            static_dir: Self::default_static_dir(),
        }
    }
}

impl ThemeConfig {
    fn default_templates_dir() -> String {
        DEFAULT_TEMPLATES_DIR.to_string()
    }

    fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    /// Glob matching every template file under the templates directory
    pub fn template_glob(&self) -> String {
        PathBuf::from(&self.templates_dir)
            .join("**")
            .join("*")
            .to_string_lossy()
            .into_owned()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let tls = &self.http.tls;
        if tls.mode == TlsMode::Manual && (tls.cert_path.is_none() || tls.key_path.is_none()) {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }
        if !matches!(
            self.logging.format.to_ascii_lowercase().as_str(),
            "text" | "json"
        ) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected \"text\" or \"json\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ConfigProvider;
    use std::io::Write;

    const MINIMAL: &str = r#"
        [http]
        host = "127.0.0.1"
        port = 3000
    "#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert_eq!(config.http.tls.redirect_port, DEFAULT_REDIRECT_PORT);
        assert_eq!(config.theme.templates_dir, DEFAULT_TEMPLATES_DIR);
        assert_eq!(config.theme.static_dir, DEFAULT_STATIC_DIR);
        assert!(!config.logging.is_json());
        assert!(config.site.environment.is_none());
    }

    #[test]
    fn test_manual_tls_requires_paths() {
        let toml = r#"
            [http]
            host = "0.0.0.0"
            port = 443
            [http.tls]
            mode = "manual"
            cert_path = "/etc/ssl/cert.pem"
        "#;
        let err = AppConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let toml = format!("{}\n[logging]\nformat = \"xml\"\n", MINIMAL);
        assert!(matches!(
            AppConfig::from_toml(&toml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_site_section_becomes_provider() {
        let toml = format!(
            "{}\n[site]\nenvironment = \"staging\"\nsite_url = \"https://staging.voluntodo.com\"\n",
            MINIMAL
        );
        let config = AppConfig::from_toml(&toml).unwrap();
        let provider = config.site.as_provider();
        assert_eq!(provider.get(ENV_VAR_ENVIRONMENT).as_deref(), Some("staging"));
        assert_eq!(
            provider.get(ENV_VAR_SITE_URL).as_deref(),
            Some("https://staging.voluntodo.com")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/voluntodo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_template_glob() {
        let theme = ThemeConfig {
            templates_dir: "/usr/share/voluntodo/templates".to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        };
        assert_eq!(theme.template_glob(), "/usr/share/voluntodo/templates/**/*");
    }

    #[test]
    fn test_cache_control_values() {
        assert_eq!(
            CACHE_CONTROL_HOME,
            "public, max-age=300, stale-while-revalidate=60, stale-if-error=300"
        );
        assert_eq!(CACHE_CONTROL_STATIC, "public, max-age=86400, immutable");
        assert_eq!(CACHE_CONTROL_ERROR, "public, max-age=5");
    }
}
