//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `docs.source_dir` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override draft inclusion.
    pub include_drafts: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Navigation settings.
    pub nav: NavSettings,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    include_drafts: Option<bool>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Content directory holding the markdown documents.
    pub source_dir: PathBuf,
    /// Whether draft documents appear in navigation.
    pub include_drafts: bool,
}

/// Navigation settings (`[nav]` section).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    /// Locale codes whose top-level directories hold translations.
    pub locales: Vec<String>,
    /// Product identifiers for multi-product sites.
    pub products: Vec<String>,
    /// Prefix prepended to slugs to form hrefs.
    pub href_prefix: String,
    /// Slug component overrides. `None` keeps the built-in table.
    pub slug_overrides: Option<HashMap<String, String>>,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            products: Vec::new(),
            href_prefix: "/docs/".to_owned(),
            slug_overrides: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require every code in a list to be a single non-empty path component.
fn require_codes(codes: &[String], field: &str) -> Result<(), ConfigError> {
    for code in codes {
        if code.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field} cannot contain empty values"
            )));
        }
        if code.contains('/') {
            return Err(ConfigError::Validation(format!(
                "{field} value \"{code}\" must not contain '/'"
            )));
        }
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(include_drafts) = settings.include_drafts {
            self.docs_resolved.include_drafts = include_drafts;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            nav: NavSettings::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                include_drafts: false,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_codes(&self.nav.locales, "nav.locales")?;
        require_codes(&self.nav.products, "nav.products")?;

        let prefix = &self.nav.href_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "nav.href_prefix must start and end with '/'".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
            include_drafts: self.docs.include_drafts.unwrap_or(false),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert!(!config.docs_resolved.include_drafts);
        assert_eq!(config.nav.href_prefix, "/docs/");
        assert!(config.nav.locales.is_empty());
        assert!(config.nav.slug_overrides.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.nav.href_prefix, "/docs/");
        assert!(config.nav.products.is_empty());
    }

    #[test]
    fn test_parse_nav_config() {
        let toml = r#"
[nav]
locales = ["ja", "zh"]
products = ["cheerpj3", "cheerpx"]
href_prefix = "/"

[nav.slug_overrides]
CONTRIBUTING = "contributing"
FAQ = "faq"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.nav.locales, vec!["ja".to_owned(), "zh".to_owned()]);
        assert_eq!(
            config.nav.products,
            vec!["cheerpj3".to_owned(), "cheerpx".to_owned()]
        );
        assert_eq!(config.nav.href_prefix, "/");
        let overrides = config.nav.slug_overrides.unwrap();
        assert_eq!(overrides.get("FAQ").map(String::as_str), Some("faq"));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content/docs"
include_drafts = true
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content/docs")
        );
        assert!(config.docs_resolved.include_drafts);
    }

    #[test]
    fn test_validate_rejects_locale_with_slash() {
        let toml = r#"
[nav]
locales = ["ja/jp"]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("nav.locales"));
    }

    #[test]
    fn test_validate_rejects_empty_product() {
        let toml = r#"
[nav]
products = [""]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_href_prefix() {
        let toml = r#"
[nav]
href_prefix = "docs"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("href_prefix"));
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert!(!config.docs_resolved.include_drafts); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_include_drafts() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            include_drafts: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.docs_resolved.include_drafts);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_load_explicit_missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("docnav.toml");

        let err = Config::load(Some(&missing), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("docnav.toml");
        std::fs::write(
            &path,
            "[docs]\nsource_dir = \"${DOCNAV_TEST_SURELY_UNSET:-site}/docs\"\n\n[nav]\nlocales = [\"ja\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp.path().join("site/docs"));
        assert_eq!(config.nav.locales, vec!["ja".to_owned()]);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_from_file_invalid_toml_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("docnav.toml");
        std::fs::write(&path, "[nav\nlocales = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings_last() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("docnav.toml");
        std::fs::write(&path, "[docs]\ninclude_drafts = false\n").unwrap();
        let settings = CliSettings {
            include_drafts: Some(true),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert!(config.docs_resolved.include_drafts);
    }
}
