use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};

/// Cards that fade in the first time they scroll into view.
pub const REVEAL_TARGETS: &str = ".service__card, .package__card, .why-choose__card";

const PENDING_STYLES: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const SHOWN_STYLES: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Fade-in progress of one card. Once shown it stays shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Shown,
}

impl Reveal {
    pub fn on_intersection(self, is_intersecting: bool) -> Self {
        match self {
            Reveal::Pending if is_intersecting => Reveal::Shown,
            other => other,
        }
    }

    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Reveal::Pending => PENDING_STYLES,
            Reveal::Shown => SHOWN_STYLES,
        }
    }
}

/// One intersection observer shared by every revealable card.
/// Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn watch(selector: &str) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                // Revealed cards are unobserved, so every entry here is still pending.
                let state = Reveal::Pending.on_intersection(entry.is_intersecting());
                if state == Reveal::Shown {
                    let target = entry.target();
                    if let Err(e) = dom::set_styles(&target, state.styles()) {
                        warn!("Could not reveal card: {}", e);
                    }
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let cards = dom::query_all(selector)?;
        for card in &cards {
            dom::set_styles(card, Reveal::Pending.styles())?;
            observer.observe(card);
        }
        info!("Watching {} cards for fade-in", cards.len());

        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let shown = Reveal::Pending.on_intersection(true);
        assert_eq!(shown, Reveal::Shown);
        assert_eq!(shown.on_intersection(false), Reveal::Shown);
        assert_eq!(Reveal::Pending.on_intersection(false), Reveal::Pending);
    }

    #[test]
    fn pending_cards_start_hidden_and_offset() {
        let styles = Reveal::Pending.styles();
        assert!(styles.contains(&("opacity", "0")));
        assert!(styles.contains(&("transform", "translateY(30px)")));
        assert!(styles
            .iter()
            .any(|(name, value)| *name == "transition" && value.contains("opacity 0.6s")));
        assert!(Reveal::Shown.styles().contains(&("opacity", "1")));
    }
}
