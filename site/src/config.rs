//! Configuration file support.
//!
//! Loads an optional `site.toml` from the project root. Every field has a
//! default, so an empty or absent file renders the stock page.

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`
    pub title: String,
    /// Meta description
    pub description: String,
    /// Where images and videos are served from
    pub assets: AssetConfig,
    /// Footer contact details
    pub contact: ContactConfig,
}

/// Public URL prefixes for media files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Image base, e.g. `/images` or a CDN URL
    pub images: String,
    /// Video base
    pub videos: String,
}

/// Footer contact details. The stock values are placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address behind the footer mail link
    pub email: String,
    /// Number as displayed; whitespace is stripped for the `tel:` link
    pub phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Lake Malawi Positive Development™".into(),
            description: "Regenerating nature, serving society and growing local economies around Lake Malawi.".into(),
            assets: AssetConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            images: "/images".into(),
            videos: "/videos".into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@example.org".into(),
            phone: "+1 000 000 0000".into(),
        }
    }
}

impl SiteConfig {
    /// Load config from `site.toml` in the given root directory.
    pub fn load(root: &Path) -> Result<Self, SiteError> {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, SiteError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(SiteError::io(path, e)),
        };
        let config = toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

impl AssetConfig {
    /// Public URL of an image file.
    pub fn image(&self, file: &str) -> String {
        join_url(&self.images, file)
    }

    /// Public URL of a video file.
    pub fn video(&self, file: &str) -> String {
        join_url(&self.videos, file)
    }
}

impl ContactConfig {
    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with spaces stripped.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

fn join_url(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.assets.images, "/images");
        assert_eq!(config.assets.videos, "/videos");
        assert_eq!(config.contact.email, "info@example.org");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
title = "PD Corridor"

[assets]
images = "https://cdn.example.org/img/"

[contact]
email = "hello@pd.mw"
phone = "+265 1 234 567"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.title, "PD Corridor");
        assert_eq!(config.assets.images, "https://cdn.example.org/img/");
        // Unset fields keep their defaults
        assert_eq!(config.assets.videos, "/videos");
        assert_eq!(config.contact.mailto(), "mailto:hello@pd.mw");
        assert_eq!(config.contact.tel(), "tel:+2651234567");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "title = [unclosed").expect("write config");

        let err = SiteConfig::load_from_path(&path).expect_err("malformed toml");
        assert!(matches!(err, SiteError::Config { .. }));
    }

    #[test]
    fn test_load_unreadable_config() {
        // A directory exists but cannot be read as a file
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::create_dir(&path).expect("create dir");

        let err = SiteConfig::load_from_path(&path).expect_err("unreadable config");
        assert!(matches!(err, SiteError::Io { .. }));
    }

    #[test]
    fn test_load_error_other_than_not_found_is_not_defaulted() {
        // `exists()` is false here, but the failure is ENOTDIR, not a missing file
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write file");

        let err = SiteConfig::load_from_path(&blocker.join(CONFIG_FILE))
            .expect_err("path through a file");
        assert!(matches!(err, SiteError::Io { .. }));
    }

    #[test]
    fn asset_urls_join_without_double_slash() {
        let assets = AssetConfig {
            images: "/static/images/".into(),
            videos: "/static/videos".into(),
        };
        assert_eq!(assets.image("hero.jpg"), "/static/images/hero.jpg");
        assert_eq!(assets.video("intro.mp4"), "/static/videos/intro.mp4");
    }
}
