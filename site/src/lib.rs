//! # pd-site
//!
//! Leptos SSR renderer for the Lake Malawi Positive Development™ landing page.
//!
//! The page is a fixed sequence of sections (header, hero, comparison, about
//! and video, statistics, highlights, closing call to action, partners,
//! footer) built from a few shared primitives and rendered once into a
//! complete static HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use pd_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::current());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal cards, links and calls to action
//! - [`components`] - Container, buttons, icons, entrance animation
//! - [`sections`] - one component per page section
//! - [`config`] - optional `site.toml` (asset bases, contact details)
//! - [`assets`] - audit of the media files the page expects
//! - [`styles`] - the inlined stylesheet
//!
//! The page has no client-side state: rendering happens once, on the build
//! machine, and the output is a plain file any static host can serve.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod outline;
pub mod sections;
pub mod styles;

pub use config::SiteConfig;
pub use error::SiteError;

use chrono::{Datelike, NaiveDate};
use document::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use std::path::Path;

/// Render-time inputs. Everything else on the page is fixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Year shown in the footer copyright line
    pub year: i32,
    /// Title, asset bases and contact details
    pub config: SiteConfig,
}

impl PageOptions {
    /// Stock configuration, year taken from the local clock.
    pub fn current() -> Self {
        Self::with_config(SiteConfig::default())
    }

    /// Given configuration, year taken from the local clock.
    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            year: chrono::Local::now().year(),
            config,
        }
    }

    /// Options as they would be on `date`.
    pub fn on_date(date: NaiveDate, config: SiteConfig) -> Self {
        Self {
            year: date.year(),
            config,
        }
    }
}

/// Render the complete landing page.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <LandingDocument options=options.clone() /> };
    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), year = options.year, "rendered landing page");

    // to_html() emits the <html> element only
    format!("<!DOCTYPE html>\n{}", html)
}

/// Write a rendered document to `path`, creating parent directories.
pub fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    std::fs::write(path, html).map_err(|e| SiteError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use std::collections::HashMap;

    fn render_2025() -> String {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        render_page(&PageOptions::on_date(date, SiteConfig::default()))
    }

    #[test]
    fn renders_complete_document() {
        let html = render_2025();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Lake Malawi Positive Development™</title>"));
        assert!(html.contains("--pd-navy"));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render_2025();
        let markers = [
            "class=\"site-header\"",
            "id=\"main\"",
            "PD vs Sustainability",
            "id=\"about\"",
            "id=\"why\"",
            "id=\"highlight\"",
            "id=\"close-cta\"",
            "id=\"partners\"",
            "class=\"site-footer\"",
            "class=\"sr-only\"",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn page_card_counts() {
        let html = render_2025();
        assert_eq!(html.matches("class=\"stat-card\"").count(), 3);
        assert_eq!(html.matches("class=\"highlight-card\"").count(), 4);
        assert_eq!(html.matches("class=\"partner-logo\"").count(), 5);
        assert_eq!(html.matches("class=\"section-bg\"").count(), 2);
        assert_eq!(html.matches("class=\"section-overlay").count(), 2);
    }

    #[test]
    fn footer_year_follows_render_date() {
        let eve = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");

        let before = render_page(&PageOptions::on_date(eve, SiteConfig::default()));
        let after = render_page(&PageOptions::on_date(new_year, SiteConfig::default()));

        assert!(before.contains("© 2025 Positive Development"));
        assert!(after.contains("© 2026 Positive Development"));
        assert!(!after.contains("© 2025"));
    }

    #[test]
    fn current_options_use_local_year() {
        assert_eq!(PageOptions::current().year, chrono::Local::now().year());
    }

    #[test]
    fn every_about_pd_link_targets_about() {
        let html = render_2025();
        let link = Regex::new(r#"<a href="([^"]*)"[^>]*>About PD</a>"#).expect("regex");
        let targets: Vec<_> = link.captures_iter(&html).map(|c| c[1].to_string()).collect();
        assert_eq!(targets, vec!["#about", "#about"]);
    }

    #[test]
    fn every_in_page_link_resolves_to_exactly_one_id() {
        let html = render_2025();
        let href = Regex::new(r##"href="#([^"]+)""##).expect("regex");
        let id = Regex::new(r#"\sid="([^"]+)""#).expect("regex");

        let mut ids: HashMap<String, usize> = HashMap::new();
        for cap in id.captures_iter(&html) {
            *ids.entry(cap[1].to_string()).or_default() += 1;
        }

        for cap in href.captures_iter(&html) {
            let target = &cap[1];
            assert_eq!(ids.get(target), Some(&1), "anchor #{target}");
        }
    }

    #[test]
    fn config_flows_into_markup() {
        let mut config = SiteConfig::default();
        config.assets.images = "https://cdn.example.org/img".into();
        config.contact.email = "hello@pd.mw".into();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");

        let html = render_page(&PageOptions::on_date(date, config));
        assert!(html.contains("src=\"https://cdn.example.org/img/logo-gt.png\""));
        assert!(html.contains("href=\"mailto:hello@pd.mw\""));
        assert!(!html.contains("/images/"));
    }

    #[test]
    fn write_page_creates_parent_dirs() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = temp.path().join("dist").join("index.html");
        write_page(&path, "<!DOCTYPE html>").expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "<!DOCTYPE html>"
        );
    }
}
