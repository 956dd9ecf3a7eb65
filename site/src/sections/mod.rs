//! Page sections, one component each, in render order.

mod about;
mod anchors;
mod closing;
mod comparison;
mod footer;
mod header;
mod hero;
mod highlights;
mod partners;
mod stats;

pub use about::About;
pub use anchors::HiddenAnchors;
pub use closing::ClosingCta;
pub use comparison::Comparison;
pub use footer::{Footer, copyright_line};
pub use header::Header;
pub use hero::Hero;
pub use highlights::Highlights;
pub use partners::Partners;
pub use stats::Stats;

/// Section names in render order.
pub const ORDER: [&str; 10] = [
    "header",
    "hero",
    "comparison",
    "about",
    "stats",
    "highlights",
    "closing-cta",
    "partners",
    "footer",
    "hidden-anchors",
];
