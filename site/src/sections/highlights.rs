use crate::components::{Container, Glyph};
use crate::content::{HIGHLIGHTS, HighlightCard, ids};
use leptos::prelude::*;

/// "What We Are Building": clickable cards from [`HIGHLIGHTS`].
#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section id=ids::HIGHLIGHT class="bg-aqua pad-md">
            <Container>
                <h2 class="section-title">"What We Are Building"</h2>
                <div class="highlights-grid">
                    {HIGHLIGHTS
                        .iter()
                        .copied()
                        .map(|card| view! { <HighlightTile card=card /> })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
        </section>
    }
}

// Cards have no destination yet, so they link to the `#` placeholder.
#[component]
fn HighlightTile(card: HighlightCard) -> impl IntoView {
    view! {
        <a href="#" class="highlight-card">
            <div class="card-heading">
                <Glyph icon=card.icon />
                <h3>{card.title}</h3>
            </div>
        </a>
    }
}
