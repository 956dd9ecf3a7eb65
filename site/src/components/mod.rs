//! Reusable building blocks shared by the page sections.
//!
//! ```text
//! Container      centred max-width band
//! PrimaryButton  filled call to action
//! OutlineButton  outlined call to action
//! CtaButton      picks one of the two from a CallToAction
//! Reveal         staggered entrance animation
//! Glyph          inline SVG icon
//! Backdrop       background image + overlay for full-bleed sections
//! ```

mod backdrop;
mod icons;
mod layout;

pub use backdrop::{Backdrop, Overlay};
pub use icons::{Glyph, icon_paths};
pub use layout::{
    Container, CtaButton, OutlineButton, PrimaryButton, Reveal, button_class, stagger_delay,
};
