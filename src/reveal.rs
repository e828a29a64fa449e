//! Scroll Reveal
//!
//! One-shot "reveal on scroll" behaviour shared by every page section.
//! A section starts `Hidden` and flips to `Revealed` the first time the
//! viewport observer reports it sufficiently visible. `Revealed` is terminal.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Observer settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible (0.0 - 1.0)
    pub threshold: f64,
    /// Stop observing after the first reveal
    pub trigger_once: bool,
}

impl RevealConfig {
    pub fn is_satisfied_by(&self, sample: IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio >= self.threshold
    }
}

/// One report from the viewport observer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Reveal state of a single section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Next state after a sample. Never goes back to `Hidden`.
    pub fn observe(self, config: &RevealConfig, sample: IntersectionSample) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Hidden if config.is_satisfied_by(sample) => RevealState::Revealed,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Pick the presentation classes for the current reveal flag
pub fn reveal_class(visible: bool, hidden: &'static str, shown: &'static str) -> &'static str {
    if visible { shown } else { hidden }
}

/// Live observer subscription. Disconnects when dropped.
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn attach_observer(
    el: &web_sys::Element,
    config: RevealConfig,
    state: ReadSignal<RevealState>,
    set_state: WriteSignal<RevealState>,
) -> Result<ObserverHandle, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let current = state.get_untracked();
                let next = current.observe(&config, sample);
                if next != current {
                    log::debug!("[REVEAL] section revealed (ratio {:.2})", sample.ratio);
                    set_state.set(next);
                }
                if next.is_visible() && config.trigger_once {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(el);

    Ok(ObserverHandle { observer, _callback: callback })
}

/// Track whether the element behind `target` has been revealed.
///
/// The returned flag starts `false` and becomes `true` at most once. If the
/// browser offers no IntersectionObserver the flag simply stays `false`.
pub fn use_reveal(target: NodeRef<html::Section>, config: RevealConfig) -> Signal<bool> {
    let (state, set_state) = signal(RevealState::Hidden);
    let subscription = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move |_| {
        let Some(el) = target.get() else { return };
        if subscription.with_value(|s| s.is_some()) {
            return;
        }
        match attach_observer(&el, config, state, set_state) {
            Ok(handle) => subscription.set_value(Some(handle)),
            Err(e) => log::debug!("[REVEAL] IntersectionObserver unavailable: {:?}", e),
        }
    });

    on_cleanup(move || {
        subscription.try_update_value(|s| s.take());
    });

    Signal::derive(move || state.get().is_visible())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: RevealConfig = RevealConfig { threshold: 0.1, trigger_once: true };

    fn visible(ratio: f64) -> IntersectionSample {
        IntersectionSample { is_intersecting: true, ratio }
    }

    fn left_viewport() -> IntersectionSample {
        IntersectionSample { is_intersecting: false, ratio: 0.0 }
    }

    #[test]
    fn test_starts_hidden() {
        let state = RevealState::default();
        assert_eq!(state, RevealState::Hidden);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_reveals_on_first_qualifying_sample() {
        let state = RevealState::Hidden.observe(&CONFIG, visible(0.25));
        assert!(state.is_visible());
    }

    #[test]
    fn test_stays_revealed_after_leaving_viewport() {
        let mut state = RevealState::Hidden.observe(&CONFIG, visible(0.5));
        for sample in [left_viewport(), visible(0.05), left_viewport(), visible(1.0)] {
            state = state.observe(&CONFIG, sample);
            assert_eq!(state, RevealState::Revealed);
        }
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let state = RevealState::Hidden.observe(&CONFIG, visible(0.05));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn test_not_intersecting_stays_hidden() {
        let sample = IntersectionSample { is_intersecting: false, ratio: 0.5 };
        assert_eq!(RevealState::Hidden.observe(&CONFIG, sample), RevealState::Hidden);
    }

    #[test]
    fn test_exact_threshold_reveals() {
        assert!(CONFIG.is_satisfied_by(visible(0.1)));
    }

    #[test]
    fn test_never_signalled_stays_hidden() {
        // No samples delivered at all
        let samples: Vec<IntersectionSample> = Vec::new();
        let state = samples.into_iter().fold(RevealState::default(), |s, x| s.observe(&CONFIG, x));
        assert!(!state.is_visible());
        assert_eq!(reveal_class(state.is_visible(), "reveal-hidden", "reveal-shown"), "reveal-hidden");
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(true, "a", "b"), "b");
        assert_eq!(reveal_class(false, "a", "b"), "a");
    }
}
