//! Particle Background
//!
//! Fixed field of softly drifting dots behind the page. Positions are derived
//! from the particle index, so every render produces the same field.

use leptos::prelude::*;

use crate::config::PARTICLE_COUNT;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Percent of viewport width
    pub left: f64,
    /// Percent of viewport height
    pub top: f64,
    pub size_px: u32,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Spread `count` particles using low-discrepancy (golden ratio) sequences
pub fn particle_layout(count: usize) -> Vec<Particle> {
    const PHI: f64 = 0.618_033_988_749_895;
    const SQRT2_FRAC: f64 = 0.414_213_562_373_095;

    (0..count)
        .map(|i| {
            let n = i as f64;
            Particle {
                left: ((n * PHI).fract() * 100.0 * 100.0).round() / 100.0,
                top: ((n * SQRT2_FRAC + 0.5).fract() * 100.0 * 100.0).round() / 100.0,
                size_px: 2 + (i % 3) as u32,
                delay_s: (i % 7) as f64 * 0.8,
                duration_s: 6.0 + (i % 5) as f64 * 2.0,
            }
        })
        .collect()
}

#[component]
pub fn ParticleBackground() -> impl IntoView {
    view! {
        <div class="particle-field" aria-hidden="true">
            {particle_layout(PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "left: {}%; top: {}%; width: {size}px; height: {size}px; animation-delay: {}s; animation-duration: {}s;",
                        p.left,
                        p.top,
                        p.delay_s,
                        p.duration_s,
                        size = p.size_px,
                    );
                    view! { <span class="particle" style=style></span> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_count() {
        assert_eq!(particle_layout(0).len(), 0);
        assert_eq!(particle_layout(36).len(), 36);
    }

    #[test]
    fn test_layout_within_viewport() {
        for p in particle_layout(200) {
            assert!((0.0..=100.0).contains(&p.left), "left {}", p.left);
            assert!((0.0..=100.0).contains(&p.top), "top {}", p.top);
            assert!((2..=4).contains(&p.size_px));
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(particle_layout(50), particle_layout(50));
    }
}
