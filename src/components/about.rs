//! About Section

use leptos::prelude::*;

use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Card, CardContent};
use crate::content::{ABOUT_HIGHLIGHTS, PROFILE};
use crate::markdown::render_markdown;
use crate::reveal::reveal_class;

#[component]
pub fn About() -> impl IntoView {
    let bio_html = render_markdown(PROFILE.bio);

    view! {
        <RevealSection id="about" class="about-section" let:visible>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading title="About" accent="Me" />
                    <div class="about-grid">
                        <div class="prose" inner_html=bio_html.clone()></div>
                        <div class="about-highlights">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <Card class="highlight-card">
                                            <CardContent>
                                                <span class="highlight-value text-gradient">{*value}</span>
                                                <span class="highlight-label">{*label}</span>
                                            </CardContent>
                                        </Card>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
