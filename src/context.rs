//! Page Context
//!
//! Shared page-level signals provided via Leptos Context API.

use leptos::prelude::*;

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Viewport is below the mobile breakpoint (touch/constrained device)
    pub is_mobile: Signal<bool>,
}

impl PageContext {
    pub fn new(is_mobile: Signal<bool>) -> Self {
        Self { is_mobile }
    }
}

/// Get the page context provided by `App`
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
