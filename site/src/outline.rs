//! Machine-readable summary of the page content.
//!
//! `pd-site outline` prints this as JSON so content reviews and link checks
//! can run without parsing HTML.

use crate::assets::{RequiredAsset, required_assets};
use crate::config::SiteConfig;
use crate::content::{self, CallToAction, HighlightCard, NavLink, PartnerLogo, StatCard};
use crate::sections;
use serde::Serialize;

/// Everything the rendered page contains, minus markup.
#[derive(Debug, Clone, Serialize)]
pub struct Outline {
    /// Document title
    pub title: String,
    /// Section names in render order
    pub sections: Vec<&'static str>,
    /// Primary nav followed by the video pill
    pub header_links: Vec<NavLink>,
    /// Footer navigation
    pub footer_links: Vec<NavLink>,
    /// Every button-styled link, in render order
    pub calls_to_action: Vec<CallToAction>,
    /// Statistic cards
    pub stats: Vec<StatCard>,
    /// Highlight cards
    pub highlights: Vec<HighlightCard>,
    /// Partner logos
    pub partners: Vec<PartnerLogo>,
    /// Link targets no section provides
    pub hidden_anchors: Vec<&'static str>,
    /// Media files with their public URLs
    pub assets: Vec<RequiredAsset>,
}

impl Outline {
    /// Collect the outline for a configuration.
    pub fn new(config: &SiteConfig) -> Self {
        let mut header_links = content::HEADER_LINKS.to_vec();
        header_links.push(content::WATCH_VIDEO_LINK);

        Self {
            title: config.title.clone(),
            sections: sections::ORDER.to_vec(),
            header_links,
            footer_links: content::FOOTER_LINKS.to_vec(),
            calls_to_action: content::calls_to_action().copied().collect(),
            stats: content::STATS.to_vec(),
            highlights: content::HIGHLIGHTS.to_vec(),
            partners: content::PARTNERS.to_vec(),
            hidden_anchors: content::hidden_anchor_ids(),
            assets: required_assets(&config.assets),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
