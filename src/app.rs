//! Portfolio App
//!
//! Page assembly: background, navigation and the content sections in order.

use leptos::prelude::*;

use crate::components::{About, Contact, Footer, Hero, Navbar, ParticleBackground, Projects, Skills, Testimonials, Uses};
use crate::content::{PROFILE, SKILL_GROUPS};
use crate::context::PageContext;
use crate::mobile::use_is_mobile;
use crate::scroll::use_smooth_scroll;
use crate::seo;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all sections
    provide_context(PageContext::new(use_is_mobile()));

    // In-page anchors scroll smoothly for the lifetime of the page
    use_smooth_scroll();

    Effect::new(move |_| {
        if let Err(e) = seo::inject_person_json_ld(&PROFILE, SKILL_GROUPS) {
            log::warn!("[APP] structured data not injected: {}", e);
        }
    });

    view! {
        <ParticleBackground />
        <Navbar />
        <main class="page">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Uses />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}
