//! Site configuration.
//!
//! Organization details, the form relay endpoint and the asset
//! directory live in a small JSON file so deployments can rebrand
//! without a rebuild. A missing or unreadable file is not an error:
//! the built-in defaults describe the WEDA deployment this app ships
//! for.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Short organization name shown in the header.
    pub org_name: String,
    /// Full legal name shown in the footer and contact card.
    pub org_full_name: String,
    /// One-line tagline under the hero title.
    pub tagline: String,
    pub phone: String,
    pub whatsapp: String,
    pub emails: Vec<String>,
    pub address: String,
    /// The external form relay the registration form posts to.
    pub relay_endpoint: String,
    /// Subject line the relay puts on forwarded submissions.
    pub form_subject: String,
    /// Asset directory override. When absent, assets are resolved
    /// relative to the working directory.
    pub asset_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            org_name: "WEDA".to_string(),
            org_full_name: "North Karnataka Women Entrepreneur's Development Association".to_string(),
            tagline: "Empowering Women Entrepreneurs of North Karnataka".to_string(),
            phone: "+91 9448377717".to_string(),
            whatsapp: "+91 94483 77717".to_string(),
            emails: vec![
                "wedank2009@gmail.com".to_string(),
                "rathi.creations.24@gmail.com".to_string(),
            ],
            address: "Flat No. 202, Pratima Residency, Dr. Kabbur Road, Malmaddi, Dharwad - 580007, Karnataka, India".to_string(),
            relay_endpoint: "https://formsubmit.co/wedank2009@gmail.com".to_string(),
            form_subject: "New WEDA Registration".to_string(),
            asset_dir: None,
        }
    }
}

impl SiteConfig {
    /// Where the config file lives:
    /// - Linux: ~/.config/weda-desktop/config.json
    /// - macOS: ~/Library/Application Support/weda-desktop/config.json
    /// - Windows: %APPDATA%\weda-desktop\config.json
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("weda-desktop");
        path.push("config.json");
        Some(path)
    }

    /// Load the config file, falling back to the built-in defaults when
    /// it is absent or malformed. Never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            log::info!("no config at {}, using built-in defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&raw)?)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let config = SiteConfig::default();
        let json = config.to_json().unwrap();
        let restored = SiteConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = SiteConfig::from_json(r#"{ "org_name": "Acme" }"#).unwrap();
        assert_eq!(config.org_name, "Acme");
        assert_eq!(config.phone, SiteConfig::default().phone);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{not json").is_err());
    }
}
