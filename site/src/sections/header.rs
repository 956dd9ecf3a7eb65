use crate::components::{Container, Glyph};
use crate::config::AssetConfig;
use crate::content::{self, HEADER_LINKS, Icon, WATCH_VIDEO_LINK};
use leptos::prelude::*;

/// Sticky header: brand mark, anchor navigation and the video pill.
///
/// The mobile menu button is rendered but has no open/close behaviour.
#[component]
pub fn Header(
    /// Where images and videos are served from
    assets: AssetConfig,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <Container class="header-bar">
                <a href="/" class="brand">
                    <img
                        src=assets.image(content::assets::LOGO)
                        alt="PD Logo"
                        width="461"
                        height="44"
                        class="brand-logo"
                    />
                </a>

                <nav aria-label="Primary" class="primary-nav">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.target class="nav-link">{link.label}</a> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header-actions">
                    <a href=WATCH_VIDEO_LINK.target class="watch-link">
                        <Glyph icon=Icon::Play class="icon icon-sm" />
                        {WATCH_VIDEO_LINK.label}
                    </a>
                    <button type="button" class="menu-toggle" aria-label="Open Menu">
                        <Glyph icon=Icon::Menu />
                    </button>
                </div>
            </Container>
        </header>
    }
}
