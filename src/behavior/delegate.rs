use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget};
use yew::Callback;

use super::packages::PackageSnapshot;
use super::page::PageAction;
use super::scroll::scroll_to_anchor;
use crate::config::WHATSAPP_NUMBER;
use crate::dom::{self, DomError};

/// An event listener that stays registered for as long as the value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn register(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

const TOGGLE: &str = ".package__toggle";
const ORDER: &str = ".btn--package";
const ANCHOR: &str = "a[href^='#']";
const CARD: &str = ".package__card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Toggle,
    Order,
    Anchor,
}

/// Picks the control a click belongs to, given whether the click target sits
/// inside an element matching each selector. A toggle wins over an order button,
/// and both win over a plain hash link (order buttons are `href="#"` links too).
pub fn control_kind(inside: impl Fn(&str) -> bool) -> Option<ControlKind> {
    [
        (TOGGLE, ControlKind::Toggle),
        (ORDER, ControlKind::Order),
        (ANCHOR, ControlKind::Anchor),
    ]
    .into_iter()
    .find(|&(selector, _)| inside(selector))
    .map(|(_, kind)| kind)
}

/// Interactive controls a page click can land on, directly or through a child
/// such as a button's icon or label.
#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Toggle { card: usize },
    Order { card: Option<Element> },
    Anchor { href: String, nav_link: bool },
}

impl Control {
    pub fn classify(target: &Element) -> Option<Control> {
        let kind = control_kind(|selector| closest(target, selector).is_some())?;
        match kind {
            ControlKind::Toggle => {
                let card = closest(target, CARD)?;
                let index = card_index(card.get_attribute("data-card").as_deref())?;
                Some(Control::Toggle { card: index })
            }
            ControlKind::Order => Some(Control::Order {
                card: closest(target, CARD),
            }),
            ControlKind::Anchor => {
                let anchor = closest(target, ANCHOR)?;
                Some(Control::Anchor {
                    href: anchor.get_attribute("href")?,
                    nav_link: anchor.matches(".nav__link").unwrap_or(false),
                })
            }
        }
    }
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Position of a card in the package grid, from its `data-card` attribute.
pub fn card_index(attribute: Option<&str>) -> Option<usize> {
    attribute?.trim().parse().ok()
}

/// Routes a click anywhere on the page to the control it belongs to.
pub fn dispatch_click(event: &Event, on_action: &Callback<PageAction>) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Some(control) = Control::classify(&target) else {
        return;
    };

    event.prevent_default();
    match control {
        Control::Toggle { card } => {
            event.stop_propagation();
            on_action.emit(PageAction::ToggleCard(card));
        }
        Control::Order { card: Some(card) } => open_order(&card),
        Control::Order { card: None } => warn!("Order button outside a package card"),
        Control::Anchor { href, nav_link } => {
            if nav_link {
                on_action.emit(PageAction::CloseMenu);
            }
            match scroll_to_anchor(&href) {
                Ok(true) => {}
                Ok(false) => debug!("No target for {}", href),
                Err(e) => warn!("Anchor scroll failed: {}", e),
            }
        }
    }
}

fn open_order(card: &Element) {
    let snapshot = PackageSnapshot::read(card);
    info!(
        "Ordering {} over WhatsApp",
        snapshot.name.as_deref().unwrap_or("package")
    );
    let url = snapshot.order_url(WHATSAPP_NUMBER);
    debug!("{}", url);
    if let Err(e) = dom::open_in_new_tab(&url) {
        warn!("Could not open WhatsApp: {}", e);
    }
}

/// The single document-level click listener behind every delegated control.
/// Owned by the page; dropping it unregisters the listener.
pub struct ControlDelegate {
    _listener: Listener,
}

impl ControlDelegate {
    pub fn attach(on_action: Callback<PageAction>) -> Result<Self, DomError> {
        let document = dom::document()?;
        let listener = Listener::register(document.into(), "click", move |event: Event| {
            dispatch_click(&event, &on_action)
        })?;
        info!("Attached page click delegate");
        Ok(ControlDelegate {
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_index_parses_data_attribute() {
        assert_eq!(card_index(Some("2")), Some(2));
        assert_eq!(card_index(Some(" 0 ")), Some(0));
        assert_eq!(card_index(Some("gold")), None);
        assert_eq!(card_index(None), None);
    }

    fn inside(ancestors: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |selector: &str| ancestors.iter().any(|ancestor| *ancestor == selector)
    }

    #[test]
    fn icon_inside_toggle_is_a_toggle() {
        // The svg or label span under the toggle button, inside a card.
        assert_eq!(control_kind(inside(&[TOGGLE, CARD])), Some(ControlKind::Toggle));
    }

    #[test]
    fn order_button_beats_its_hash_href() {
        assert_eq!(
            control_kind(inside(&[ORDER, ANCHOR, CARD])),
            Some(ControlKind::Order)
        );
    }

    #[test]
    fn plain_hash_link_is_an_anchor() {
        assert_eq!(control_kind(inside(&[ANCHOR])), Some(ControlKind::Anchor));
    }

    #[test]
    fn card_body_click_is_ignored() {
        assert_eq!(control_kind(inside(&[CARD])), None);
        assert_eq!(control_kind(inside(&[])), None);
    }
}
