use crate::content::hidden_anchor_ids;
use leptos::prelude::*;

/// Invisible scroll targets for in-page links that no section provides.
#[component]
pub fn HiddenAnchors() -> impl IntoView {
    hidden_anchor_ids()
        .into_iter()
        .map(|id| view! { <div id=id class="sr-only" aria-hidden="true"></div> })
        .collect::<Vec<_>>()
}
