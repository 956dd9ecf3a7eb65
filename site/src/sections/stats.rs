use crate::components::{Container, Glyph};
use crate::content::{STATS, STATS_FOOTNOTE, StatCard, ids};
use leptos::prelude::*;

/// "Why Lake Malawi?": one card per entry in [`STATS`].
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id=ids::WHY class="pad-md">
            <Container>
                <h2 class="section-title centered">"Why Lake Malawi?"</h2>
                <div class="stats-grid">
                    {STATS.iter().copied().map(|stat| view! { <StatTile stat=stat /> }).collect::<Vec<_>>()}
                </div>
                <p class="section-note">{STATS_FOOTNOTE}</p>
            </Container>
        </section>
    }
}

#[component]
fn StatTile(stat: StatCard) -> impl IntoView {
    view! {
        <div class="stat-card">
            <Glyph icon=stat.icon class="icon icon-lg stat-icon" />
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
