//! CSS for the landing page.
//!
//! One stylesheet, inlined into `<head>` so the rendered document has no
//! stylesheet dependency. Colours come from the PD palette below.
//!
//! Class names are shared with the markup in [`crate::sections`], so a rule
//! here renamed without its element silently stops applying. The palette is
//! also exposed as `--pd-*` custom properties:
//!
//! ```rust
//! use pd_site::styles::{NAVY, PAGE_CSS};
//!
//! assert!(PAGE_CSS.contains(&format!("--pd-navy: {NAVY};")));
//! ```

/// Deep teal/navy for headings
pub const NAVY: &str = "#0B3C49";
/// Gold/orange for calls to action
pub const GOLD: &str = "#F4A300";
/// Light aqua for section breaks
pub const AQUA: &str = "#E6F4F1";
/// Warm off-white for the about and partner bands
pub const CREAM: &str = "#FBF7EF";

/// Entrance animation length in seconds.
pub const REVEAL_DURATION_SECS: f32 = 0.6;
/// Delay added per stagger step, in seconds.
pub const REVEAL_STEP_SECS: f32 = 0.15;

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --pd-navy: #0B3C49;
    --pd-gold: #F4A300;
    --pd-aqua: #E6F4F1;
    --pd-cream: #FBF7EF;
    --pd-text: #111827;
    --pd-muted: #374151;
    --pd-faint: #6B7280;
    --pd-border: #E5E7EB;
    --pd-radius: 1rem;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    background: #ffffff;
    color: var(--pd-text);
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    line-height: 1.5;
}

img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }
h1, h2, h3, p, ul { margin: 0; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

/* Container */
.container {
    width: 100%;
    max-width: 80rem;
    margin-left: auto;
    margin-right: auto;
    padding-left: 1rem;
    padding-right: 1rem;
}
@media (min-width: 640px) { .container { padding-left: 1.5rem; padding-right: 1.5rem; } }
@media (min-width: 1024px) { .container { padding-left: 2rem; padding-right: 2rem; } }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: var(--pd-radius);
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 600;
    transition: box-shadow 150ms ease, background-color 150ms ease;
}
.btn:focus-visible { outline: 2px solid var(--pd-gold); outline-offset: 2px; }
.btn-primary {
    background-color: var(--pd-gold);
    color: #ffffff;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.btn-primary:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
.btn-outline {
    border: 1px solid #ffffff;
    color: #ffffff;
    background: transparent;
}
.btn-outline:hover { background-color: rgba(255, 255, 255, 0.1); }

.icon { width: 1.5rem; height: 1.5rem; flex-shrink: 0; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-md { width: 1.25rem; height: 1.25rem; }
.icon-lg { width: 1.75rem; height: 1.75rem; }

/* Entrance animation */
@keyframes pd-reveal {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}
.reveal {
    opacity: 0;
    animation: pd-reveal 0.6s ease-out forwards;
}
@media (prefers-reduced-motion: reduce) {
    .reveal { animation: none; opacity: 1; }
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--pd-border);
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(8px);
}
.header-bar {
    display: flex;
    height: 4rem;
    align-items: center;
    justify-content: space-between;
}
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-logo { height: 4rem; object-fit: contain; }
.primary-nav { display: none; align-items: center; gap: 1.5rem; }
.nav-link { font-size: 0.875rem; font-weight: 700; color: var(--pd-navy); }
.nav-link:hover { opacity: 0.8; }
.header-actions { display: flex; align-items: center; gap: 0.75rem; }
.watch-link {
    display: none;
    align-items: center;
    gap: 0.5rem;
    border: 1px solid var(--pd-navy);
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--pd-navy);
}
.menu-toggle {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border: 0;
    border-radius: 9999px;
    padding: 0.5rem;
    background: transparent;
    color: var(--pd-muted);
    cursor: pointer;
}
.menu-toggle:hover { background: #F3F4F6; }
@media (min-width: 768px) {
    .primary-nav { display: flex; }
    .watch-link { display: inline-flex; }
    .menu-toggle { display: none; }
}

/* Full-bleed sections with a background image */
.backdrop-section { position: relative; }
.section-bg { position: absolute; inset: 0; }
.section-bg-image { width: 100%; height: 100%; object-fit: cover; }
.section-overlay { position: absolute; inset: 0; }
.overlay-gradient {
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.7));
}
.overlay-dim { background: rgba(0, 0, 0, 0.6); }
.backdrop-content {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #ffffff;
}

/* Hero */
.hero-content { min-height: 72vh; padding: 5rem 0; }
.hero-title {
    max-width: 56rem;
    font-size: 2.25rem;
    font-weight: 800;
    letter-spacing: -0.025em;
}
.hero-title + .hero-title { margin-top: 1rem; }
.hero-title h1, .hero-subtitle p { font: inherit; }
.hero-subtitle {
    max-width: 48rem;
    margin-top: 1.25rem;
    font-size: 1rem;
    font-weight: 700;
    color: rgba(255, 255, 255, 0.9);
}
.hero-subtitle + .hero-subtitle { margin-top: 0.25rem; }
.hero-actions, .closing-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.hero-actions { margin-top: 2rem; }
@media (min-width: 640px) {
    .hero-title { font-size: 3rem; }
    .hero-subtitle { font-size: 1.125rem; }
}
@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
    .hero-subtitle { font-size: 1.25rem; }
}

/* Shared section furniture */
.section-title { font-size: 1.875rem; font-weight: 800; color: var(--pd-navy); }
.section-title.centered { text-align: center; }
.section-note {
    max-width: 48rem;
    margin: 1.5rem auto 0;
    text-align: center;
    font-size: 0.75rem;
    color: var(--pd-faint);
}
.bg-aqua { background-color: var(--pd-aqua); }
.bg-cream { background-color: var(--pd-cream); }
.pad-md { padding: 2.5rem 0; }
.pad-lg { padding: 4rem 0; }
.pad-xl { padding: 5rem 0; }

/* Comparison */
.comparison-grid { display: grid; gap: 1.5rem; margin-top: 1rem; }
.comparison-card {
    border-radius: var(--pd-radius);
    background: #ffffff;
    padding: 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.card-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; color: var(--pd-navy); }
.card-heading h3 { font-size: 1.125rem; font-weight: 700; }
.claims { list-style: disc; padding-left: 1.25rem; font-size: 0.875rem; font-weight: 700; }
.claims li + li { margin-top: 0.25rem; }
.comparison-tagline {
    max-width: 42rem;
    margin: 1.5rem auto 0;
    text-align: center;
    font-size: 0.75rem;
    font-weight: 700;
    color: var(--pd-muted);
}

/* About */
.about-grid { display: grid; align-items: center; gap: 2.5rem; }
.about-body { margin-top: 1rem; font-size: 0.875rem; line-height: 1.625; font-weight: 700; color: var(--pd-muted); }
.about-action { margin-top: 1.5rem; }
.video-column { max-width: 56rem; margin: 0 auto; padding: 0 1rem; text-align: center; }
.video-title { margin-bottom: 1.5rem; font-size: 1.5rem; font-weight: 700; }
.video-frame {
    position: relative;
    aspect-ratio: 16 / 9;
    overflow: hidden;
    border-radius: var(--pd-radius);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.video-player { width: 100%; height: 100%; object-fit: cover; }

/* Stats */
.stats-grid { display: grid; gap: 1.5rem; margin-top: 2.5rem; }
.stat-card {
    border: 1px solid var(--pd-border);
    border-radius: var(--pd-radius);
    padding: 1.5rem;
    text-align: center;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.stat-icon { margin: 0 auto 0.5rem; color: var(--pd-navy); }
.stat-value { font-size: 2.25rem; font-weight: 800; color: var(--pd-navy); }
.stat-label { margin-top: 0.25rem; font-size: 0.875rem; color: var(--pd-muted); }

/* Highlights */
.highlights-grid { display: grid; gap: 1.5rem; margin-top: 1rem; }
.highlight-card {
    border-radius: var(--pd-radius);
    background: #ffffff;
    padding: 1.25rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 150ms ease;
}
.highlight-card:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.highlight-card h3 { font-size: 0.875rem; font-weight: 600; }
.highlight-card:hover h3 { text-decoration: underline; }

/* Closing call to action */
.closing-content { min-height: 50vh; padding: 4rem 0; }
.closing-headline { max-width: 56rem; font-size: 1.5rem; font-weight: 700; }
.closing-headline + .closing-headline { margin-top: 1rem; }
.closing-actions { margin-top: 1.75rem; }
@media (min-width: 640px) { .closing-headline { font-size: 1.875rem; } }
@media (min-width: 768px) { .closing-headline { font-size: 2.25rem; } }

/* Partners */
.partners-blurb { max-width: 48rem; margin: 0.75rem auto 0; text-align: center; font-size: 0.875rem; color: var(--pd-muted); }
.partner-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    align-items: center;
    gap: 2rem;
    margin-top: 2rem;
}
.partner-logo { margin: 0 auto; height: 3rem; width: 9rem; }
.partner-logo img, .footer-logo img { width: 100%; height: 100%; object-fit: contain; }

/* Footer */
.site-footer { border-top: 1px solid var(--pd-border); padding: 2.5rem 0; }
.footer-grid { display: grid; gap: 2rem; }
.footer-brand { font-size: 0.875rem; font-weight: 700; color: var(--pd-navy); }
.footer-contact { display: flex; align-items: center; gap: 1rem; margin-top: 1rem; font-size: 0.875rem; color: var(--pd-muted); }
.footer-contact a { display: inline-flex; align-items: center; gap: 0.5rem; }
.footer-contact a:hover, .footer-link:hover { text-decoration: underline; }
.footer-nav { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.75rem; font-size: 0.875rem; }
.footer-aside { display: grid; align-content: start; gap: 1rem; }
.footer-logos { display: flex; align-items: center; gap: 1rem; }
.footer-logo { height: 4rem; width: 9rem; }
.footer-logo.small { height: 2.5rem; width: 2.5rem; }
.copyright { font-size: 0.75rem; color: var(--pd-faint); }

@media (min-width: 640px) {
    .stats-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .partner-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
@media (min-width: 768px) {
    .comparison-grid, .about-grid, .highlights-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .partner-grid { grid-template-columns: repeat(5, minmax(0, 1fr)); }
    .footer-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .footer-nav { grid-template-columns: minmax(0, 1fr); }
}
@media (min-width: 1024px) {
    .highlights-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_stylesheet() {
        for color in [NAVY, GOLD, AQUA, CREAM] {
            assert!(PAGE_CSS.contains(color), "missing {color}");
        }
    }

    #[test]
    fn reveal_timing_matches_stylesheet() {
        assert!(PAGE_CSS.contains(&format!("pd-reveal {}s", REVEAL_DURATION_SECS)));
        assert!(PAGE_CSS.contains("translateY(10px)"));
    }
}
