//! Layout primitives: the centred container, the two button variants and
//! the entrance-animation wrapper.

use crate::content::{ButtonVariant, CallToAction};
use crate::styles::REVEAL_STEP_SECS;
use super::Glyph;
use leptos::prelude::*;

/// Centred, max-width band with responsive horizontal padding.
#[component]
pub fn Container(
    children: Children,
    /// Extra classes appended after `container`
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! { <div class=container_class(class)>{children()}</div> }
}

fn container_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "container".to_string()
    } else {
        format!("container {extra}")
    }
}

/// Filled call to action in the accent colour.
#[component]
pub fn PrimaryButton(
    children: Children,
    /// Link target; `#` until a real destination exists
    #[prop(default = "#")]
    href: &'static str,
) -> impl IntoView {
    view! { <a href=href class=button_class(ButtonVariant::Primary)>{children()}</a> }
}

/// Transparent call to action with a white border, for dark backgrounds.
#[component]
pub fn OutlineButton(
    children: Children,
    /// Link target; `#` until a real destination exists
    #[prop(default = "#")]
    href: &'static str,
) -> impl IntoView {
    view! { <a href=href class=button_class(ButtonVariant::Outline)>{children()}</a> }
}

/// CSS classes for a button variant. Both share `btn`, so size, radius and
/// padding stay identical.
pub fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Outline => "btn btn-outline",
    }
}

/// Renders a [`CallToAction`] with the button variant it asks for.
#[component]
pub fn CtaButton(
    /// The call to action to render
    cta: CallToAction,
) -> impl IntoView {
    let label = move || {
        view! {
            {cta.icon.map(|icon| view! { <Glyph icon=icon class="icon icon-md" /> })}
            {cta.label}
        }
    };
    match cta.variant {
        ButtonVariant::Primary => {
            view! { <PrimaryButton href=cta.target>{label()}</PrimaryButton> }.into_any()
        }
        ButtonVariant::Outline => {
            view! { <OutlineButton href=cta.target>{label()}</OutlineButton> }.into_any()
        }
    }
}

/// Delay for the given stagger step, in seconds.
pub fn stagger_delay(step: u32) -> f32 {
    step as f32 * REVEAL_STEP_SECS
}

/// Fades its children in and slides them up once on load.
/// Elements with a higher `step` start later.
#[component]
pub fn Reveal(
    children: Children,
    /// Stagger position; each step adds [`REVEAL_STEP_SECS`] of delay
    #[prop(default = 0)]
    step: u32,
    /// Extra classes on the wrapper
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = format!("reveal {class}").trim_end().to_string();
    let style = format!("animation-delay: {:.2}s", stagger_delay(step));
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
