use crate::components::{Container, CtaButton};
use crate::config::AssetConfig;
use crate::content::{self, ABOUT_ACTION, ABOUT_BODY, ids};
use leptos::prelude::*;

/// What the corridor is, next to the introduction video.
#[component]
pub fn About(
    /// Where images and videos are served from
    assets: AssetConfig,
) -> impl IntoView {
    view! {
        <section id=ids::ABOUT class="bg-cream pad-xl">
            <Container>
                <div class="about-grid">
                    <div>
                        <h2 class="section-title">"What is the Lake Malawi PD Corridor?"</h2>
                        <p class="about-body">{ABOUT_BODY}</p>
                        <div class="about-action">
                            <CtaButton cta=ABOUT_ACTION />
                        </div>
                    </div>

                    <div class="video-column">
                        <h2 class="video-title">"Watch the 60s Introduction"</h2>
                        <div class="video-frame">
                            <video
                                controls=true
                                preload="metadata"
                                poster=assets.image(content::assets::ABOUT_POSTER)
                                class="video-player"
                            >
                                <source src=assets.video(content::assets::INTRO_VIDEO) type="video/mp4" />
                                "Your browser does not support the video tag."
                            </video>
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}
