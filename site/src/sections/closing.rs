use crate::components::{Backdrop, Container, CtaButton, Overlay};
use crate::config::AssetConfig;
use crate::content::{self, CLOSING_ACTIONS, CLOSING_HEADLINE, ids};
use leptos::prelude::*;

/// Full-bleed closing call to action over the dusk photo.
#[component]
pub fn ClosingCta(
    /// Where images and videos are served from
    assets: AssetConfig,
) -> impl IntoView {
    view! {
        <section id=ids::CLOSE_CTA class="backdrop-section">
            <Backdrop
                src=assets.image(content::assets::DUSK)
                alt="Lake Malawi at Dusk"
                overlay=Overlay::Dim
            />
            <Container>
                <div class="backdrop-content closing-content">
                    {CLOSING_HEADLINE
                        .iter()
                        .map(|line| view! { <h2 class="closing-headline">{*line}</h2> })
                        .collect::<Vec<_>>()}
                    <div class="closing-actions">
                        {CLOSING_ACTIONS.iter().copied().map(|cta| view! { <CtaButton cta=cta /> }).collect::<Vec<_>>()}
                    </div>
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
    fn closing_has_one_background_and_one_overlay() {
        let html = view! { <ClosingCta assets=AssetConfig::default() /> }.to_html();
        assert_eq!(html.matches("class=\"section-bg\"").count(), 1);
        assert_eq!(html.matches("<img").count(), 1);
        assert_eq!(html.matches("class=\"section-overlay").count(), 1);
        assert!(html.contains("loading=\"lazy\""));
    }

    #[test]
    fn closing_buttons_target_involved_and_contact() {
        let html = view! { <ClosingCta assets=AssetConfig::default() /> }.to_html();
        assert!(html.contains("href=\"#involved\""));
        assert!(html.contains("href=\"#contact\""));
        assert_eq!(html.matches("class=\"closing-headline\"").count(), 2);
    }
}
