//! Page Footer

use leptos::prelude::*;

use crate::content::PROFILE;

pub fn copyright_line(year: u32, name: &str) -> String {
    format!("© {} {}. Built with Rust and Leptos.", year, name)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p>{copyright_line(year, PROFILE.name)}</p>
                <a href="#home" class="footer-top">"Back to top ↑"</a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026, "Alex Morgan"), "© 2026 Alex Morgan. Built with Rust and Leptos.");
    }
}
