//! Uses Section
//!
//! Hardware, software and services in daily use.

use leptos::prelude::*;

use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::content::USES_GROUPS;
use crate::reveal::reveal_class;

#[component]
pub fn Uses() -> impl IntoView {
    view! {
        <RevealSection id="uses" class="uses-section" let:visible>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading
                        title="What I"
                        accent="Use"
                        description="The gear and software behind the work"
                    />
                    <div class="uses-grid">
                        {USES_GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <Card class="uses-card">
                                        <CardHeader>
                                            <CardTitle>{group.title}</CardTitle>
                                        </CardHeader>
                                        <CardContent>
                                            <ul class="uses-list">
                                                {group
                                                    .items
                                                    .iter()
                                                    .map(|item| {
                                                        view! {
                                                            <li>
                                                                <span class="uses-name">{item.name}</span>
                                                                <span class="uses-note">{item.note}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </CardContent>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
