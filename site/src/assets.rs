//! Asset audit.
//!
//! The page references a fixed set of images and one video. A missing file is
//! not a render error (the browser falls back to alt text), but deploying
//! without one is almost always a mistake, so the CLI can check a public
//! directory before shipping.

use crate::config::AssetConfig;
use crate::content;
use crate::error::SiteError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Media type of a [`RequiredAsset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Served from the images base
    Image,
    /// Served from the videos base
    Video,
}

/// One file the page expects to be served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredAsset {
    /// Image or video
    pub kind: AssetKind,
    /// File name under its base
    pub file: &'static str,
    /// Public URL as rendered into the page
    pub url: String,
}

/// Outcome of [`audit`]: every required asset lands in exactly one list.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AssetReport {
    /// Found under the public directory
    pub present: Vec<RequiredAsset>,
    /// Expected under the public directory but absent
    pub missing: Vec<RequiredAsset>,
    /// Remote URLs that cannot be checked against a local directory
    pub unchecked: Vec<RequiredAsset>,
}

/// Every asset the page references, images first.
pub fn required_assets(assets: &AssetConfig) -> Vec<RequiredAsset> {
    let images = content::image_files().into_iter().map(|file| RequiredAsset {
        kind: AssetKind::Image,
        file,
        url: assets.image(file),
    });
    let videos = content::video_files().into_iter().map(|file| RequiredAsset {
        kind: AssetKind::Video,
        file,
        url: assets.video(file),
    });
    images.chain(videos).collect()
}

/// Map a public URL onto the public directory. Absolute URLs (CDN hosts)
/// cannot be checked locally and yield `None`.
fn local_path(public_dir: &Path, url: &str) -> Option<PathBuf> {
    if url.contains("://") {
        return None;
    }
    Some(public_dir.join(url.trim_start_matches('/')))
}

/// Check every required asset against `public_dir`.
pub fn audit(public_dir: &Path, assets: &AssetConfig) -> AssetReport {
    let mut report = AssetReport::default();
    for asset in required_assets(assets) {
        match local_path(public_dir, &asset.url) {
            Some(path) if path.is_file() => {
                tracing::debug!(file = asset.file, path = %path.display(), "asset present");
                report.present.push(asset);
            }
            Some(path) => {
                tracing::warn!(file = asset.file, path = %path.display(), "asset missing");
                report.missing.push(asset);
            }
            None => {
                tracing::info!(url = %asset.url, "remote asset, not checked");
                report.unchecked.push(asset);
            }
        }
    }
    report
}

impl AssetReport {
    /// True when no local file is missing. Unchecked remote assets do not count.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Turn missing assets into an error.
    pub fn into_result(self) -> Result<Self, SiteError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(SiteError::MissingAssets {
                missing: self.missing.iter().map(|a| a.url.clone()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn lists_images_then_video() {
        let required = required_assets(&AssetConfig::default());
        assert_eq!(required.len(), 10);
        assert_eq!(required[0].url, "/images/Lake-Malawi-Project-Logo.png");
        let last = required.last().expect("video");
        assert_eq!(last.kind, AssetKind::Video);
        assert_eq!(last.url, "/videos/Lake-Malawi-Project-Introduction-2.mp4");
    }

    #[test]
    fn audit_reports_missing_files() {
        let temp = TempDir::new().expect("temp dir");
        let images = temp.path().join("images");
        std::fs::create_dir_all(&images).expect("images dir");
        std::fs::write(images.join("logo-gt.png"), b"png").expect("write logo");

        let report = audit(temp.path(), &AssetConfig::default());
        assert_eq!(report.present.len(), 1);
        assert_eq!(report.present[0].file, "logo-gt.png");
        assert_eq!(report.missing.len(), 9);
        assert!(report.unchecked.is_empty());

        let err = report.into_result().expect_err("incomplete");
        assert!(err.to_string().starts_with("9 expected asset(s) missing"));
    }

    #[test]
    fn remote_assets_are_not_checked() {
        let temp = TempDir::new().expect("temp dir");
        let assets = AssetConfig {
            images: "https://cdn.example.org/images".into(),
            videos: "https://cdn.example.org/videos".into(),
        };
        let report = audit(temp.path(), &assets);
        assert!(report.present.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.unchecked.len(), 10);
        assert_eq!(
            report.unchecked[0].url,
            "https://cdn.example.org/images/Lake-Malawi-Project-Logo.png"
        );
    }
}
