//! Project Showcase Layout
//!
//! Turns the static project table into per-card render plans. The plan holds
//! everything derived per item so the component stays declarative.

use leptos_tilt::TiltConfig;

use crate::config::{CARD_STAGGER_MS, CARD_TILT};
use crate::models::{status_color, Project};

/// How a card is wrapped
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardDecoration {
    /// Plain card (touch/constrained devices)
    Flat,
    /// Card inside a pointer-tilt wrapper
    Tilt(TiltConfig),
}

/// Everything needed to render one project card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectCardPlan {
    pub project: &'static Project,
    pub status_class: &'static str,
    pub delay_ms: u32,
    pub decoration: CardDecoration,
}

/// Entrance delay for the card at `index`
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(CARD_STAGGER_MS)
}

pub fn card_decoration(is_mobile: bool) -> CardDecoration {
    if is_mobile {
        CardDecoration::Flat
    } else {
        CardDecoration::Tilt(CARD_TILT)
    }
}

/// Link target for a card action; `#` marks a placeholder with no destination
pub fn action_href(url: &'static str) -> Option<&'static str> {
    match url.trim() {
        "" | "#" => None,
        _ => Some(url),
    }
}

/// One plan per project, in table order
pub fn project_cards(projects: &'static [Project], is_mobile: bool) -> Vec<ProjectCardPlan> {
    let decoration = card_decoration(is_mobile);
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCardPlan {
            project,
            status_class: status_color(project.status),
            delay_ms: stagger_delay_ms(index),
            decoration,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_one_card_per_project_in_order() {
        let plans = project_cards(PROJECTS, false);
        assert_eq!(plans.len(), PROJECTS.len());
        let titles: Vec<_> = plans.iter().map(|p| p.project.title).collect();
        let expected: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_empty_table() {
        static NONE: &[Project] = &[];
        assert!(project_cards(NONE, true).is_empty());
    }

    #[test]
    fn test_status_classes() {
        let classes: Vec<_> = project_cards(PROJECTS, false).iter().map(|p| p.status_class).collect();
        assert_eq!(classes, vec!["status-green", "status-blue", "status-yellow", "status-purple"]);
    }

    #[test]
    fn test_unknown_status_card_is_neutral() {
        static ODD: &[Project] = &[Project {
            title: "Mystery",
            description: "",
            tags: &[],
            live_url: "#",
            source_url: "#",
            status: "Unknown",
        }];
        assert_eq!(project_cards(ODD, false)[0].status_class, "status-neutral");
    }

    #[test]
    fn test_placeholder_actions_are_inert() {
        assert_eq!(action_href("#"), None);
        assert_eq!(action_href(""), None);
        assert_eq!(action_href("https://example.com"), Some("https://example.com"));
    }

    #[test]
    fn test_stagger() {
        let delays: Vec<_> = project_cards(PROJECTS, false).iter().map(|p| p.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn test_mobile_cards_are_flat() {
        for plan in project_cards(PROJECTS, true) {
            assert_eq!(plan.decoration, CardDecoration::Flat);
        }
    }

    #[test]
    fn test_desktop_cards_tilt_with_configured_params() {
        for plan in project_cards(PROJECTS, false) {
            match plan.decoration {
                CardDecoration::Tilt(config) => {
                    assert_eq!(config.max_angle_x, 12.0);
                    assert_eq!(config.max_angle_y, 12.0);
                    assert_eq!(config.scale, 1.03);
                    assert_eq!(config.glare_max_opacity, 0.15);
                    assert_eq!(config.transition_speed_ms, 250);
                    assert!(config.glare_enable);
                }
                CardDecoration::Flat => panic!("expected tilt on desktop"),
            }
        }
    }
}
