//! Projects Section
//!
//! Static project showcase grid with status badges and pointer tilt.

use leptos::prelude::*;
use leptos_tilt::Tilt;

use super::icons::{Icon, IconKind};
use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, LinkButton};
use crate::content::PROJECTS;
use crate::context::use_page_context;
use crate::reveal::reveal_class;
use crate::showcase::{action_href, project_cards, CardDecoration, ProjectCardPlan};

/// Card action: a real link when the project has one, otherwise an inert button
#[component]
fn ProjectAction(url: &'static str, icon: IconKind, label: &'static str) -> impl IntoView {
    match action_href(url) {
        Some(href) => view! {
            <LinkButton href=href variant=ButtonVariant::Outline external=true>
                <Icon kind=icon />
                {label}
            </LinkButton>
        }
        .into_any(),
        None => view! {
            <Button variant=ButtonVariant::Outline class="project-action">
                <Icon kind=icon />
                {label}
            </Button>
        }
        .into_any(),
    }
}

/// Single project card, tilted or flat depending on the plan
#[component]
fn ProjectCard(plan: ProjectCardPlan, visible: Signal<bool>) -> impl IntoView {
    let project = plan.project;
    let entrance_class = move || {
        format!("project-card-entrance {}", reveal_class(visible.get(), "card-hidden", "card-shown"))
    };
    let entrance_style = format!("transition-delay: {}ms;", plan.delay_ms);

    let card = view! {
        <div class=entrance_class style=entrance_style>
            <Card class="project-card">
                <CardHeader>
                    <div class="project-card-title-row">
                        <CardTitle>{project.title}</CardTitle>
                        <span class=format!("status-badge {}", plan.status_class)>{project.status}</span>
                    </div>
                    <CardDescription>{project.description}</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="tag-list">
                        {project.tags.iter().map(|tag| view! { <span class="tag-chip">{*tag}</span> }).collect_view()}
                    </div>
                    <div class="project-actions">
                        <ProjectAction url=project.live_url icon=IconKind::ExternalLink label="Live Demo" />
                        <ProjectAction url=project.source_url icon=IconKind::Github label="Source Code" />
                    </div>
                </CardContent>
            </Card>
        </div>
    };

    match plan.decoration {
        CardDecoration::Flat => view! { <div class="project-card-slot">{card}</div> }.into_any(),
        CardDecoration::Tilt(config) => view! {
            <Tilt config=config class="project-card-slot">
                {card}
            </Tilt>
        }
        .into_any(),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <RevealSection id="projects" class="projects-section" let:visible>
            <div class="section-backdrop projects-backdrop" aria-hidden="true"></div>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading
                        title="Featured"
                        accent="Projects"
                        description="A curated selection of recent projects showcasing technical expertise, innovative solutions, and modern development practices"
                    />
                    <div class="project-grid">
                        {move || {
                            project_cards(PROJECTS, ctx.is_mobile.get())
                                .into_iter()
                                .map(|plan| view! { <ProjectCard plan=plan visible=visible /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
