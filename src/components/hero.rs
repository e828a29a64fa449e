//! Hero Section
//!
//! Name, rotating role line and calls to action.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::reveal_section::RevealSection;
use super::ui::{ButtonVariant, LinkButton};
use crate::config::ROLE_ROTATION_MS;
use crate::content::PROFILE;
use crate::reveal::reveal_class;

/// Index of the role shown after `current`
pub fn next_role_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let roles = PROFILE.roles;
    let (role_index, set_role_index) = signal(0usize);

    // Rotate roles until the hero is torn down
    let ticker = StoredValue::new_local((roles.len() > 1).then(|| {
        Interval::new(ROLE_ROTATION_MS, move || {
            set_role_index.update(|i| *i = next_role_index(*i, roles.len()));
        })
    }));
    on_cleanup(move || {
        ticker.try_update_value(|t| t.take());
    });

    let current_role = move || roles.get(role_index.get()).copied().unwrap_or_default();

    view! {
        <RevealSection id="home" class="hero-section" let:visible>
            <div class="container hero-content">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <p class="hero-greeting">"Hi, I'm"</p>
                    <h1 class="hero-name text-gradient">{PROFILE.name}</h1>
                    <p class="hero-role" aria-live="polite">
                        // Re-created per role so the fade animation replays
                        {move || view! { <span class="hero-role-text">{current_role()}</span> }}
                    </p>
                    <p class="hero-headline">{PROFILE.headline}</p>
                    <div class="hero-actions">
                        <LinkButton href="#projects" variant=ButtonVariant::Primary>"View my work"</LinkButton>
                        <LinkButton href="#contact" variant=ButtonVariant::Outline>"Get in touch"</LinkButton>
                    </div>
                </div>
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Scroll to about">
                <Icon kind=IconKind::ArrowDown />
            </a>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_cycle() {
        assert_eq!(next_role_index(0, 4), 1);
        assert_eq!(next_role_index(3, 4), 0);
    }

    #[test]
    fn test_no_roles() {
        assert_eq!(next_role_index(0, 0), 0);
        assert_eq!(next_role_index(5, 1), 0);
    }
}
