use crate::components::Container;
use crate::config::AssetConfig;
use crate::content::{PARTNERS, PARTNERS_BLURB, ids};
use leptos::prelude::*;

/// Partner logos above the co-creation blurb.
#[component]
pub fn Partners(
    /// Where images and videos are served from
    assets: AssetConfig,
) -> impl IntoView {
    view! {
        <section id=ids::PARTNERS class="bg-cream pad-lg">
            <Container>
                <h2 class="section-title centered">"Built Together"</h2>
                <p class="partners-blurb">{PARTNERS_BLURB}</p>
                <div class="partner-grid">
                    {PARTNERS
                        .iter()
                        .map(|logo| {
                            view! {
                                <div class="partner-logo">
                                    <img src=assets.image(logo.image) alt=logo.alt loading="lazy" />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_five_logos() {
        let html = view! { <Partners assets=AssetConfig::default() /> }.to_html();
        assert_eq!(html.matches("<img").count(), 5);
        assert!(html.contains("alt=\"Georgia Tech\""));
        assert!(html.contains("src=\"/images/logo-mw-3.png\""));
    }
}
