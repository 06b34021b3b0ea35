use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfpkit_core::DEFAULT_SENDER;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "RFPKIT_CONFIG";
pub const MAIL_FROM_ENV: &str = "RFPKIT_MAIL_FROM";

const DEFAULT_LOG_FILTER: &str = "rfpkit=info,rfpkit_core=info";

/// CLI settings, read from a JSON file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Sender address for rendered invitations
    pub mail_from: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
            mail_from: DEFAULT_SENDER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `explicit`, then `RFPKIT_CONFIG`, then the user
    /// config directory, falling back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_path(explicit, env::var_os(CONFIG_ENV), default_path());

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        Ok(config.with_mail_from(env::var(MAIL_FROM_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Overrides the sender when a non-blank value is given.
    #[must_use]
    pub fn with_mail_from(mut self, mail_from: Option<String>) -> Self {
        if let Some(from) = mail_from.filter(|f| !f.trim().is_empty()) {
            self.mail_from = from;
        }
        self
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rfpkit").join("config.json"))
}

fn resolve_path(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| default.filter(|p| p.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.pretty);
        assert_eq!(config.mail_from, "RFP System <no-reply@example.com>");
        assert_eq!(config.log_filter, "rfpkit=info,rfpkit_core=info");
    }

    #[test]
    fn test_from_file_fills_missing_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"pretty": false}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.mail_from, DEFAULT_SENDER);
    }

    #[test]
    fn test_from_file_rejects_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_resolve_path_order() {
        let tmp = TempDir::new().unwrap();
        let default = tmp.path().join("config.json");
        let explicit = Path::new("/explicit.json");

        assert_eq!(
            resolve_path(Some(explicit), Some("/env.json".into()), Some(default.clone())),
            Some(PathBuf::from("/explicit.json"))
        );
        assert_eq!(
            resolve_path(None, Some("/env.json".into()), Some(default.clone())),
            Some(PathBuf::from("/env.json"))
        );

        // The default location only counts once the file exists.
        assert_eq!(resolve_path(None, None, Some(default.clone())), None);
        fs::write(&default, "{}").unwrap();
        assert_eq!(resolve_path(None, None, Some(default.clone())), Some(default));
    }

    #[test]
    fn test_mail_from_override() {
        let config = Config::default().with_mail_from(Some("Buyer <buyer@corp.test>".into()));
        assert_eq!(config.mail_from, "Buyer <buyer@corp.test>");

        let config = Config::default().with_mail_from(Some("  ".into()));
        assert_eq!(config.mail_from, DEFAULT_SENDER);
    }
}
