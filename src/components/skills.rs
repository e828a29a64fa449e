//! Skills Section
//!
//! Grouped proficiency bars. Bars stay empty until the section is revealed,
//! then grow to their level.

use leptos::prelude::*;

use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::content::SKILL_GROUPS;
use crate::models::SkillGroup;
use crate::reveal::reveal_class;
use crate::showcase::stagger_delay_ms;

/// Inline style for a skill bar fill
pub fn skill_bar_width(level: u8, visible: bool) -> String {
    let width = if visible { level.min(100) } else { 0 };
    format!("width: {}%;", width)
}

#[component]
fn SkillCard(group: &'static SkillGroup, index: usize, visible: Signal<bool>) -> impl IntoView {
    let delay = stagger_delay_ms(index);

    view! {
        <Card class="skill-card">
            <CardHeader>
                <CardTitle>{group.title}</CardTitle>
            </CardHeader>
            <CardContent>
                <ul class="skill-list">
                    {group
                        .skills
                        .iter()
                        .map(|skill| {
                            let level = skill.level;
                            view! {
                                <li class="skill-row">
                                    <div class="skill-label">
                                        <span>{skill.name}</span>
                                        <span class="skill-level">{format!("{}%", level.min(100))}</span>
                                    </div>
                                    <div class="skill-track" role="progressbar" aria-valuenow=level.to_string() aria-valuemin="0" aria-valuemax="100">
                                        <div
                                            class="skill-fill"
                                            style=move || format!("{} transition-delay: {}ms;", skill_bar_width(level, visible.get()), delay)
                                        ></div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection id="skills" class="skills-section" let:visible>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading
                        title="Skills &"
                        accent="Expertise"
                        description="Tools and technologies I reach for to take ideas from sketch to production"
                    />
                    <div class="skill-grid">
                        {SKILL_GROUPS
                            .iter()
                            .enumerate()
                            .map(|(index, group)| view! { <SkillCard group=group index=index visible=visible /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bars_are_empty() {
        assert_eq!(skill_bar_width(85, false), "width: 0%;");
    }

    #[test]
    fn test_revealed_bars_fill_to_level() {
        assert_eq!(skill_bar_width(85, true), "width: 85%;");
        assert_eq!(skill_bar_width(0, true), "width: 0%;");
    }

    #[test]
    fn test_level_capped() {
        assert_eq!(skill_bar_width(250, true), "width: 100%;");
    }
}
