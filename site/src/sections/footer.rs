use crate::components::{Container, Glyph};
use crate::config::{AssetConfig, ContactConfig};
use crate::content::{self, FOOTER_LINKS, Icon, ids};
use leptos::prelude::*;

/// Copyright line for the given calendar year.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} Positive Development. All rights reserved.")
}

/// Brand, footer navigation, contact links and the copyright line.
#[component]
pub fn Footer(
    /// Where images and videos are served from
    assets: AssetConfig,
    /// Mail and phone shown under the contact heading
    contact: ContactConfig,
    /// Copyright year
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <Container>
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">"Positive Development™"</h3>
                        <div id=ids::CONTACT class="footer-contact">
                            <a href=contact.mailto()>
                                <Glyph icon=Icon::Mail class="icon icon-sm" />
                                {contact.email.clone()}
                            </a>
                            <a href=contact.tel()>
                                <Glyph icon=Icon::Phone class="icon icon-sm" />
                                {contact.phone.clone()}
                            </a>
                        </div>
                    </div>

                    <nav aria-label="Footer" class="footer-nav">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.target class="footer-link">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </nav>

                    <div class="footer-aside">
                        <div class="footer-logos">
                            <div class="footer-logo">
                                <img src=assets.image(content::assets::PD_LOGO) alt="PD" loading="lazy" />
                            </div>
                            <div class="footer-logo small">
                                <img src=assets.image(content::assets::GT_LOGO) alt="GT" loading="lazy" />
                            </div>
                        </div>
                        <p class="copyright">{copyright_line(year)}</p>
                    </div>
                </div>
            </Container>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(year: i32) -> String {
        view! {
            <Footer assets=AssetConfig::default() contact=ContactConfig::default() year=year />
        }
        .to_html()
    }

    #[test]
    fn footer_shows_render_year() {
        assert!(render(2025).contains("© 2025 Positive Development. All rights reserved."));
        assert!(render(2031).contains("© 2031 Positive Development"));
    }

    #[test]
    fn contact_links_use_mailto_and_tel() {
        let html = render(2025);
        assert!(html.contains("href=\"mailto:info@example.org\""));
        assert!(html.contains("href=\"tel:+10000000000\""));
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn footer_about_link_targets_about() {
        let html = render(2025);
        let about = html.find("About PD").expect("about link");
        let anchor_start = html[..about].rfind("<a ").expect("enclosing anchor");
        assert!(html[anchor_start..about].contains("href=\"#about\""));
        assert!(html.contains("href=\"#why\""));
    }
}
