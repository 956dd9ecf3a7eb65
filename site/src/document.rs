//! Root document: `<head>` with the inlined stylesheet, then the page body.

use crate::PageOptions;
use crate::config::{AssetConfig, ContactConfig, SiteConfig};
use crate::sections::{
    About, ClosingCta, Comparison, Footer, Header, HiddenAnchors, Hero, Highlights, Partners,
    Stats,
};
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    /// Year and site configuration
    options: PageOptions,
) -> impl IntoView {
    let PageOptions { year, config } = options;
    let SiteConfig {
        title,
        description,
        assets,
        contact,
    } = config;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage year=year assets=assets contact=contact />
            </body>
        </html>
    }
}

/// Every section, top to bottom, rendered once.
#[component]
pub fn LandingPage(
    /// Copyright year
    year: i32,
    /// Where images and videos are served from
    assets: AssetConfig,
    /// Footer contact details
    contact: ContactConfig,
) -> impl IntoView {
    view! {
        <Header assets=assets.clone() />
        <main>
            <Hero assets=assets.clone() />
            <Comparison />
            <About assets=assets.clone() />
            <Stats />
            <Highlights />
            <ClosingCta assets=assets.clone() />
            <Partners assets=assets.clone() />
        </main>
        <Footer assets=assets contact=contact year=year />
        <HiddenAnchors />
    }
}
