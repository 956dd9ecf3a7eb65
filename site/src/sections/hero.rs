use crate::components::{Backdrop, Container, CtaButton, Overlay, Reveal};
use crate::config::AssetConfig;
use crate::content::{self, HERO_ACTIONS, HERO_SUBTITLE, HERO_TITLE, ids};
use leptos::prelude::*;

/// Full-viewport hero: photo, title, subtitle and two calls to action.
#[component]
pub fn Hero(
    /// Where images and videos are served from
    assets: AssetConfig,
) -> impl IntoView {
    let [title_top, title_bottom] = HERO_TITLE;
    let [subtitle_top, subtitle_bottom] = HERO_SUBTITLE;

    view! {
        <section id=ids::MAIN class="backdrop-section">
            <Backdrop
                src=assets.image(content::assets::HERO)
                alt="Lake Malawi shoreline and fishers"
                overlay=Overlay::Gradient
                priority=true
            />
            <Container>
                <div class="backdrop-content hero-content">
                    // Titles appear together, then the subtitle, then the buttons
                    <Reveal step=0 class="hero-title">
                        <h1>{title_top}</h1>
                    </Reveal>
                    <Reveal step=0 class="hero-title">
                        <h1>{title_bottom}</h1>
                    </Reveal>
                    <Reveal step=1 class="hero-subtitle">
                        <p>{subtitle_top}</p>
                    </Reveal>
                    <Reveal step=1 class="hero-subtitle">
                        <p>{subtitle_bottom}</p>
                    </Reveal>
                    <Reveal step=2 class="hero-actions">
                        {HERO_ACTIONS.iter().copied().map(|cta| view! { <CtaButton cta=cta /> }).collect::<Vec<_>>()}
                    </Reveal>
                </div>
            </Container>
        </section>
    }
}
