use crate::components::{Container, Glyph};
use crate::content::{COMPARISON, COMPARISON_TAGLINE, ComparisonCard};
use leptos::prelude::*;

/// "PD vs Sustainability": two cards side by side.
#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section aria-labelledby="pd-vs" class="bg-aqua pad-md">
            <Container>
                <h2 id="pd-vs" class="section-title">"PD vs Sustainability"</h2>
                <div class="comparison-grid">
                    {COMPARISON.iter().copied().map(|card| view! { <ComparisonPanel card=card /> }).collect::<Vec<_>>()}
                </div>
                <p class="comparison-tagline">{COMPARISON_TAGLINE}</p>
            </Container>
        </section>
    }
}

#[component]
fn ComparisonPanel(card: ComparisonCard) -> impl IntoView {
    view! {
        <div class="comparison-card">
            <div class="card-heading">
                <Glyph icon=card.icon />
                <h3>{card.title}</h3>
            </div>
            <ul class="claims">
                {card.claims.iter().map(|claim| view! { <li>{*claim}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_two_cards_with_three_claims_each() {
        let html = view! { <Comparison /> }.to_html();
        assert_eq!(html.matches("class=\"comparison-card\"").count(), 2);
        assert_eq!(html.matches("<li>").count(), 6);

        let traditional = html.find("Traditional Sustainability").expect("first card");
        let positive = html.find("<h3>Positive Development™</h3>").expect("second card");
        assert!(traditional < positive);

        let cards: Vec<&str> = html.split("class=\"comparison-card\"").skip(1).collect();
        assert!(cards.iter().all(|card| card.matches("<li>").count() == 3));
        assert!(cards[0].contains("Mitigates negative tipping points"));
        assert!(cards[1].contains("Fosters positive tipping points"));

        assert!(html.contains(COMPARISON_TAGLINE));
    }

    #[test]
    fn heading_labels_the_section() {
        let html = view! { <Comparison /> }.to_html();
        assert!(html.contains("aria-labelledby=\"pd-vs\""));
        assert_eq!(html.matches("id=\"pd-vs\"").count(), 1);
    }
}
