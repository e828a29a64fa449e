//! Smooth In-Page Scrolling
//!
//! A single document-level click listener that turns `href="#id"` anchor
//! clicks into smooth scrolls instead of jumps.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Element id targeted by an in-page `href`, if any
pub fn in_page_fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport
pub fn scroll_to_id(id: &str) -> bool {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return false };
    let Some(el) = doc.get_element_by_id(id) else { return false };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn on_document_click(ev: web_sys::MouseEvent) {
    if ev.default_prevented() {
        return;
    }
    let Some(target) = ev.target() else { return };
    let Some(el) = target.dyn_ref::<web_sys::Element>() else { return };
    // Clicks on icons/spans inside the anchor count too
    let Ok(Some(anchor)) = el.closest("a[href]") else { return };
    let Some(href) = anchor.get_attribute("href") else { return };
    let Some(id) = in_page_fragment(&href) else { return };

    ev.prevent_default();
    if !scroll_to_id(id) {
        log::debug!("[SCROLL] no element with id {:?}", id);
    }
}

/// Document click listener. Unbinds when dropped.
pub struct ClickListener {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

/// Bind the smooth-scroll click listener on the document
pub fn bind_smooth_scroll() -> Option<ClickListener> {
    let document = web_sys::window()?.document()?;
    let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(on_document_click);

    match document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref()) {
        Ok(()) => {
            log::debug!("[SCROLL] smooth scroll listener bound");
            Some(ClickListener { document, callback })
        }
        Err(e) => {
            log::warn!("[SCROLL] could not bind click listener: {:?}", e);
            None
        }
    }
}

/// Keep the smooth-scroll listener alive for the current owner's lifetime
pub fn use_smooth_scroll() {
    let listener = StoredValue::new_local(bind_smooth_scroll());
    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_hrefs() {
        assert_eq!(in_page_fragment("#projects"), Some("projects"));
        assert_eq!(in_page_fragment("#contact-form"), Some("contact-form"));
    }

    #[test]
    fn test_non_fragment_hrefs() {
        assert_eq!(in_page_fragment("#"), None);
        assert_eq!(in_page_fragment(""), None);
        assert_eq!(in_page_fragment("https://example.com/#about"), None);
        assert_eq!(in_page_fragment("/faq#try"), None);
        assert_eq!(in_page_fragment("mailto:hello@example.com"), None);
    }
}
