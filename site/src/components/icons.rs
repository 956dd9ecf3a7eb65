//! Inline SVG glyphs.
//!
//! Outline icons in the style of [Lucide](https://lucide.dev/): 24×24 grid,
//! 2px round strokes, drawn in `currentColor` so they follow the text colour
//! of whatever contains them.

use crate::content::Icon;
use leptos::prelude::*;

/// Renders the glyph for an [`Icon`].
///
/// # Example
///
/// ```rust,ignore
/// view! { <Glyph icon=Icon::Fish class="icon-lg stat-icon" /> }
/// ```
#[component]
pub fn Glyph(
    /// Which glyph to draw
    icon: Icon,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon_paths(icon).iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for each glyph.
pub fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Play => ICON_PLAY,
        Icon::CirclePlay => ICON_CIRCLE_PLAY,
        Icon::Fish => ICON_FISH,
        Icon::Leaf => ICON_LEAF,
        Icon::Recycle => ICON_RECYCLE,
        Icon::Sprout => ICON_SPROUT,
        Icon::Landmark => ICON_LANDMARK,
        Icon::GraduationCap => ICON_GRADUATION_CAP,
        Icon::Mail => ICON_MAIL,
        Icon::Phone => ICON_PHONE,
        Icon::Menu => ICON_MENU,
    }
}

// =============================================================================
// Glyph path data
// =============================================================================

const ICON_PLAY: &[&str] = &["M6 3l14 9-14 9V3z"];

const ICON_CIRCLE_PLAY: &[&str] = &[
    "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
    "M10 8l6 4-6 4V8z",
];

const ICON_FISH: &[&str] = &[
    "M6.5 12c.94-3.46 4.94-6 8.5-6 3.56 0 6.06 2.54 7 6-.94 3.47-3.44 6-7 6s-7.56-2.53-8.5-6Z",
    "M18 12v.5",
    "M16 17.93a9.77 9.77 0 0 1 0-11.86",
    "M7 10.67C7 8 5.58 5.97 2.73 5.5c-1 1.5-1 5 .23 6.5-1.24 1.5-1.24 5-.23 6.5C5.58 18.03 7 16 7 13.33",
    "M10.46 7.26C10.2 5.88 9.17 4.24 8 3h5.8a2 2 0 0 1 1.98 1.67l.23 1.4",
    "m16.01 17.93-.23 1.4A2 2 0 0 1 13.8 21H9.5a5.96 5.96 0 0 0 1.49-3.98",
];

const ICON_LEAF: &[&str] = &[
    "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
    "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
];

const ICON_RECYCLE: &[&str] = &[
    "M7 19H4.815a1.83 1.83 0 0 1-1.57-.881 1.785 1.785 0 0 1-.004-1.784L7.196 9.5",
    "M11 19h8.203a1.83 1.83 0 0 0 1.556-.89 1.784 1.784 0 0 0 0-1.775l-1.226-2.12",
    "m14 16-3 3 3 3",
    "M8.293 13.596 7.196 9.5 3.1 10.598",
    "m9.344 5.811 1.093-1.892A1.83 1.83 0 0 1 11.985 3a1.784 1.784 0 0 1 1.546.888l3.943 6.843",
    "m13.378 9.633 4.096 1.098 1.097-4.096",
];

const ICON_SPROUT: &[&str] = &[
    "M7 20h10",
    "M10 20c5.5-2.5.8-6.4 3-10",
    "M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z",
    "M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z",
];

const ICON_LANDMARK: &[&str] = &[
    "M3 22h18",
    "M6 18v-7",
    "M10 18v-7",
    "M14 18v-7",
    "M18 18v-7",
    "M12 2l8 5H4z",
];

const ICON_GRADUATION_CAP: &[&str] = &[
    "M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z",
    "M22 10v6",
    "M6 12.5V16a6 3 0 0 0 12 0v-3.5",
];

const ICON_MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

const ICON_PHONE: &[&str] = &[
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];

const ICON_MENU: &[&str] = &["M3 12h18", "M3 6h18", "M3 18h18"];
