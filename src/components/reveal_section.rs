//! Reveal Section Component
//!
//! `<section>` wrapper that owns the one-shot reveal flag for its content.

use leptos::html;
use leptos::prelude::*;

use crate::config::SECTION_REVEAL;
use crate::reveal::{use_reveal, RevealConfig};

/// Page section that reports when it first scrolls into view.
///
/// Children receive the reveal flag: `<RevealSection id="about" let:visible>`.
#[component]
pub fn RevealSection<F, IV>(
    /// Anchor id, target of in-page links
    #[prop(into)]
    id: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] config: Option<RevealConfig>,
    children: F,
) -> impl IntoView
where
    F: Fn(Signal<bool>) -> IV + Send + 'static,
    IV: IntoView + 'static,
{
    let target = NodeRef::<html::Section>::new();
    let visible = use_reveal(target, config.unwrap_or(SECTION_REVEAL));

    view! {
        <section id=id node_ref=target class=format!("section {}", class)>
            {children(visible)}
        </section>
    }
}

/// Title block shared by the content sections
#[component]
pub fn SectionHeading(
    title: &'static str,
    /// Highlighted trailing word(s)
    accent: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-heading">
                {title} " " <span class="text-gradient">{accent}</span>
            </h2>
            <div class="section-divider" aria-hidden="true"></div>
            {description.map(|d| view! { <p class="section-description">{d}</p> })}
        </div>
    }
}
