//! Navigation Bar
//!
//! Fixed top bar with in-page anchors. On mobile the links collapse behind a
//! menu toggle.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::context::use_page_context;

/// (label, href)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Uses", "#uses"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_page_context();
    let (menu_open, set_menu_open) = signal(false);

    // Leaving mobile layout closes the menu
    Effect::new(move |_| {
        if !ctx.is_mobile.get() {
            set_menu_open.set(false);
        }
    });

    let links_class = move || {
        if ctx.is_mobile.get() && !menu_open.get() {
            "nav-links collapsed"
        } else {
            "nav-links"
        }
    };

    view! {
        <header class="navbar">
            <nav class="container nav-inner" aria-label="Sections">
                <a href="#home" class="nav-brand">{PROFILE.name}</a>
                <Show when=move || ctx.is_mobile.get()>
                    <button
                        class="nav-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </Show>
                <ul class=links_class>
                    {NAV_LINKS
                        .iter()
                        .copied()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a href=href on:click=move |_| set_menu_open.set(false)>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
