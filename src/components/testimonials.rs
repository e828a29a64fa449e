//! Testimonials Section

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Card, CardContent};
use crate::content::TESTIMONIALS;
use crate::reveal::reveal_class;
use crate::showcase::stagger_delay_ms;

/// Avatar initials: first letter of the first and last word
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <RevealSection id="testimonials" class="testimonials-section" let:visible>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading
                        title="Kind"
                        accent="Words"
                        description="What people I've worked with have to say"
                    />
                    <div class="testimonial-grid">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(index, t)| {
                                let style = format!("transition-delay: {}ms;", stagger_delay_ms(index));
                                view! {
                                    <div
                                        class=move || format!("testimonial-entrance {}", reveal_class(visible.get(), "card-hidden", "card-shown"))
                                        style=style
                                    >
                                        <Card class="testimonial-card">
                                            <CardContent>
                                                <Icon kind=IconKind::Quote class="testimonial-quote-icon" />
                                                <blockquote class="testimonial-quote">{t.quote}</blockquote>
                                                <div class="testimonial-author">
                                                    <span class="avatar" aria-hidden="true">{initials(t.author)}</span>
                                                    <div>
                                                        <div class="author-name">{t.author}</div>
                                                        <div class="author-role">{t.role}</div>
                                                    </div>
                                                </div>
                                            </CardContent>
                                        </Card>
                                    </div>
                                }
                            })
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
    fn test_initials() {
        assert_eq!(initials("Priya Raman"), "PR");
        assert_eq!(initials("Sofia de Almeida"), "SA");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("  "), "");
        assert_eq!(initials("élodie durand"), "ÉD");
    }
}
