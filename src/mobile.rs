//! Device Class Detection
//!
//! Reactive "is this a touch/narrow viewport" check backed by `matchMedia`.
//! The signal follows the viewport across the breakpoint (window resize,
//! device rotation), so readers re-evaluate it on every render.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MOBILE_BREAKPOINT_PX;

/// Media query matching viewports below the mobile breakpoint
pub fn mobile_media_query() -> String {
    format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1)
}

/// Width-based fallback used when `matchMedia` is unavailable
pub fn is_mobile_width(width: f64) -> bool {
    width < f64::from(MOBILE_BREAKPOINT_PX)
}

/// `change` listener on a media query list. Unbinds when dropped.
struct MediaListener {
    query: web_sys::MediaQueryList,
    callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for MediaListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

fn window_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(false, is_mobile_width)
}

/// Track a media query as a signal
pub fn use_media_query(query: &str) -> Signal<bool> {
    let media = web_sys::window().and_then(|w| w.match_media(query).ok().flatten());
    let initial = media.as_ref().map_or_else(window_is_mobile, |mq| mq.matches());
    let (matches, set_matches) = signal(initial);

    let listener = media.and_then(|query_list| {
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            set_matches.set(ev.matches());
        });
        match query_list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(MediaListener { query: query_list, callback }),
            Err(e) => {
                log::warn!("[DEVICE] could not watch media query: {:?}", e);
                None
            }
        }
    });
    let listener = StoredValue::new_local(listener);

    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });

    matches.into()
}

/// True on touch/narrow viewports
pub fn use_is_mobile() -> Signal<bool> {
    use_media_query(&mobile_media_query())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_query_below_breakpoint() {
        assert_eq!(mobile_media_query(), "(max-width: 767px)");
    }

    #[test]
    fn test_width_fallback() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1440.0));
    }
}
