use leptos::prelude::*;

/// Darkening layer drawn over a background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Top-to-bottom black gradient
    Gradient,
    /// Flat 60% black
    Dim,
}

impl Overlay {
    fn class(self) -> &'static str {
        match self {
            Overlay::Gradient => "section-overlay overlay-gradient",
            Overlay::Dim => "section-overlay overlay-dim",
        }
    }
}

/// Full-bleed background image with one overlay layer. Place it first inside
/// a `backdrop-section`; content after it is stacked above.
#[component]
pub fn Backdrop(
    /// Image URL
    src: String,
    /// Image alt text
    alt: &'static str,
    /// Layer drawn over the image
    overlay: Overlay,
    /// Load eagerly (above the fold)
    #[prop(default = false)]
    priority: bool,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };
    view! {
        <div class="section-bg">
            <img src=src alt=alt loading=loading class="section-bg-image" />
            <div class=overlay.class()></div>
        </div>
    }
}
