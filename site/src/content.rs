//! Literal page content.
//!
//! Every card, link and call to action on the page is declared here once and
//! mapped into markup by [`crate::components`]. Nothing in this module changes
//! after compilation; the only render-time inputs live in [`crate::PageOptions`].

use serde::Serialize;

/// Glyphs used across the page. Rendered by [`crate::components::Glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Solid triangle, used in the video pill
    Play,
    /// Play triangle inside a ring
    CirclePlay,
    /// Fish
    Fish,
    /// Leaf
    Leaf,
    /// Circular arrows
    Recycle,
    /// Seedling
    Sprout,
    /// Columned building
    Landmark,
    /// Mortarboard
    GraduationCap,
    /// Envelope
    Mail,
    /// Handset
    Phone,
    /// Hamburger menu
    Menu,
}

/// A navigation link. Targets may repeat across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// `href`, usually an in-page anchor such as `#about`
    pub target: &'static str,
}

/// One statistic in the "Why Lake Malawi?" band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Headline figure, e.g. `2M+`
    pub value: &'static str,
    /// What the figure counts
    pub label: &'static str,
    /// Glyph shown above the figure
    pub icon: Icon,
}

/// One card in the "What We Are Building" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightCard {
    /// Card text
    pub title: &'static str,
    /// Glyph shown beside the text
    pub icon: Icon,
}

/// A partner logo. `image` is a file name under the images base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartnerLogo {
    /// Image file name
    pub image: &'static str,
    /// Alt text naming the partner
    pub alt: &'static str,
}

/// Visual variant of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Filled gold button
    Primary,
    /// Transparent button with a light border
    Outline,
}

/// A button-styled link: label, anchor target, variant and an optional
/// leading icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    /// Button text
    pub label: &'static str,
    /// `href` of the link
    pub target: &'static str,
    /// Filled or outlined
    pub variant: ButtonVariant,
    /// Glyph rendered before the label
    pub icon: Option<Icon>,
}

/// One side of the "PD vs Sustainability" comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonCard {
    /// Card heading
    pub title: &'static str,
    /// Glyph shown beside the heading
    pub icon: Icon,
    /// Bullet points, in order
    pub claims: [&'static str; 3],
}

/// Element ids owned by page sections.
pub mod ids {
    /// Hero section
    pub const MAIN: &str = "main";
    /// Intro video and mission copy
    pub const ABOUT: &str = "about";
    /// Statistics band
    pub const WHY: &str = "why";
    /// "What We Are Building" grid
    pub const HIGHLIGHT: &str = "highlight";
    /// Closing banner
    pub const CLOSE_CTA: &str = "close-cta";
    /// Partner logos
    pub const PARTNERS: &str = "partners";
    /// Footer contact block
    pub const CONTACT: &str = "contact";

    /// Ids rendered by sections, in page order.
    pub const SECTIONS: &[&str] = &[MAIN, ABOUT, WHY, HIGHLIGHT, CLOSE_CTA, PARTNERS, CONTACT];
}

/// Image and video file names.
pub mod assets {
    /// Header brand mark
    pub const LOGO: &str = "Lake-Malawi-Project-Logo.png";
    /// Hero background
    pub const HERO: &str = "home-page-main-image.png";
    /// Poster frame of the intro video
    pub const ABOUT_POSTER: &str = "what-this-is.jpg";
    /// Closing banner background
    pub const DUSK: &str = "Lake-Malawi-at-Dusk.jpg";
    /// Positive Development logo
    pub const PD_LOGO: &str = "new-pd-logo.png";
    /// Georgia Tech logo
    pub const GT_LOGO: &str = "logo-gt.png";
    /// Intro video
    pub const INTRO_VIDEO: &str = "Lake-Malawi-Project-Introduction-2.mp4";
}

/// Primary navigation, left to right.
pub const HEADER_LINKS: [NavLink; 5] = [
    NavLink {
        label: "About PD",
        target: "#about",
    },
    NavLink {
        label: "Lake Malawi PD Corridor",
        target: "#about",
    },
    NavLink {
        label: "Media",
        target: "#media",
    },
    NavLink {
        label: "Get Involved",
        target: "#involved",
    },
    NavLink {
        label: "Contact",
        target: "#contact",
    },
];

/// Pill link next to the primary nav.
pub const WATCH_VIDEO_LINK: NavLink = NavLink {
    label: "Watch 60s Video",
    target: "#about",
};

/// Footer navigation.
pub const FOOTER_LINKS: [NavLink; 5] = [
    NavLink {
        label: "About PD",
        target: "#about",
    },
    NavLink {
        label: "Corridor",
        target: "#why",
    },
    NavLink {
        label: "Media",
        target: "#media",
    },
    NavLink {
        label: "Get Involved",
        target: "#involved",
    },
    NavLink {
        label: "Contact",
        target: "#contact",
    },
];

/// Hero heading, one entry per line.
pub const HERO_TITLE: [&str; 2] = ["Lake Malawi Project", "Positive Development™"];

/// Hero subheading, one entry per line.
pub const HERO_SUBTITLE: [&str; 2] = [
    "Doing more good: Regenerating Nature,",
    "Serving Society and Growing Local Economies — Together",
];

/// Buttons under the hero text.
pub const HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Watch 60-Second Video",
        target: "#about",
        variant: ButtonVariant::Outline,
        icon: Some(Icon::CirclePlay),
    },
    CallToAction {
        label: "Get Involved",
        target: "#involved",
        variant: ButtonVariant::Primary,
        icon: None,
    },
];

/// Traditional sustainability first, then Positive Development.
pub const COMPARISON: [ComparisonCard; 2] = [
    ComparisonCard {
        title: "Traditional Sustainability",
        icon: Icon::Leaf,
        claims: [
            "\"Do less harm\"",
            "Accepts trade-offs and thinks in silos",
            "Mitigates negative tipping points",
        ],
    },
    ComparisonCard {
        title: "Positive Development™",
        icon: Icon::Recycle,
        claims: [
            "\"Do more good\"",
            "Creates synergistic benefits across sectors",
            "Fosters positive tipping points",
        ],
    },
];

/// Line under the comparison cards.
pub const COMPARISON_TAGLINE: &str = "Positive Development™ is about engineering positive tipping points for society, the environment and the economy";

/// Copy beside the intro video.
pub const ABOUT_BODY: &str = "A world-first model that links regenerative agriculture, sustainable aquaculture, circular SMEs, higher education, eco-tourism and community-led conservation so that waste becomes wealth, ecosystems recover and communities thrive";

/// Button under [`ABOUT_BODY`].
pub const ABOUT_ACTION: CallToAction = CallToAction {
    label: "Get Involved",
    target: "#corridor",
    variant: ButtonVariant::Primary,
    icon: None,
};

/// Figures in the "Why Lake Malawi?" band.
pub const STATS: [StatCard; 3] = [
    StatCard {
        value: "1,000+",
        label: "fish species (global freshwater biodiversity hotspot)",
        icon: Icon::Fish,
    },
    StatCard {
        value: "2M+",
        label: "people depend on the lake",
        icon: Icon::Landmark,
    },
    StatCard {
        value: "40%+",
        label: "of national protein from fisheries",
        icon: Icon::Sprout,
    },
];

/// Caption under [`STATS`].
pub const STATS_FOOTNOTE: &str = "Pressures: overfishing, soil loss, weak value chains — PD connects solutions";

/// Cards in the "What We Are Building" grid.
pub const HIGHLIGHTS: [HighlightCard; 4] = [
    HighlightCard {
        title: "Crop and fishery byproducts → sustainable fish feed",
        icon: Icon::Recycle,
    },
    HighlightCard {
        title: "Regenerative farming that restores water & soils",
        icon: Icon::Leaf,
    },
    HighlightCard {
        title: "Circular SMEs that grow local incomes",
        icon: Icon::Sprout,
    },
    HighlightCard {
        title: "Eco-tourism \"living labs\" for learning & jobs",
        icon: Icon::GraduationCap,
    },
];

/// Closing banner heading, one entry per line.
pub const CLOSING_HEADLINE: [&str; 2] = [
    "Only one country can be first.",
    "Let's make Malawi the world's first Positive Development™ Corridor",
];

/// Buttons in the closing banner.
pub const CLOSING_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Get Involved",
        target: "#involved",
        variant: ButtonVariant::Primary,
        icon: None,
    },
    CallToAction {
        label: "Contact Us",
        target: "#contact",
        variant: ButtonVariant::Outline,
        icon: None,
    },
];

/// Text above the partner logos.
pub const PARTNERS_BLURB: &str = "Co-created with Malawian partners and supported by Georgia Tech students and global collaborators";

/// Partner logos, left to right.
pub const PARTNERS: [PartnerLogo; 5] = [
    PartnerLogo {
        image: assets::PD_LOGO,
        alt: "PD",
    },
    PartnerLogo {
        image: assets::GT_LOGO,
        alt: "Georgia Tech",
    },
    PartnerLogo {
        image: "logo-mw-1.png",
        alt: "Malawi Partner 1",
    },
    PartnerLogo {
        image: "logo-mw-2.png",
        alt: "Malawi Partner 2",
    },
    PartnerLogo {
        image: "logo-mw-3.png",
        alt: "Malawi Partner 3",
    },
];

/// Every call to action on the page, in render order.
pub fn calls_to_action() -> impl Iterator<Item = &'static CallToAction> {
    HERO_ACTIONS
        .iter()
        .chain(std::iter::once(&ABOUT_ACTION))
        .chain(CLOSING_ACTIONS.iter())
}

/// In-page anchor names (without `#`) referenced by links and buttons,
/// deduplicated in order of first appearance. A bare `#` is a placeholder
/// and is not a target.
pub fn link_targets() -> Vec<&'static str> {
    let targets = HEADER_LINKS
        .iter()
        .chain(std::iter::once(&WATCH_VIDEO_LINK))
        .map(|link| link.target)
        .chain(calls_to_action().map(|cta| cta.target))
        .chain(FOOTER_LINKS.iter().map(|link| link.target));

    let mut seen = Vec::new();
    for name in targets.filter_map(|target| target.strip_prefix('#')) {
        if !name.is_empty() && !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Anchor targets that no section provides. These get an invisible element
/// at the end of the page so every in-page link has somewhere to scroll to.
pub fn hidden_anchor_ids() -> Vec<&'static str> {
    link_targets()
        .into_iter()
        .filter(|name| !ids::SECTIONS.contains(name))
        .collect()
}

/// Image file names the page references, in render order, deduplicated.
pub fn image_files() -> Vec<&'static str> {
    let mut files = vec![assets::LOGO, assets::HERO, assets::ABOUT_POSTER, assets::DUSK];
    for logo in PARTNERS.iter() {
        if !files.contains(&logo.image) {
            files.push(logo.image);
        }
    }
    files
}

/// Video file names the page references.
pub fn video_files() -> Vec<&'static str> {
    vec![assets::INTRO_VIDEO]
}
