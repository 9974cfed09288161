use std::rc::Rc;

use yew::prelude::*;

use super::contact::ContactPanel;
use super::nav::MenuState;
use super::packages::CardState;
use super::scroll::{active_sections, link_targets, HeaderState, SectionBand};

/// Everything about the landing page that changes after load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub menu: MenuState,
    pub header: HeaderState,
    pub active_sections: Vec<String>,
    pub cards: Vec<CardState>,
    pub contact: ContactPanel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    Scrolled { y: f64, bands: Vec<SectionBand> },
    ToggleCard(usize),
    SubmitContact,
    ResetContact,
}

impl PageState {
    pub fn with_cards(count: usize) -> Self {
        PageState {
            cards: vec![CardState::default(); count],
            ..PageState::default()
        }
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::ToggleMenu => self.menu = self.menu.toggled(),
            PageAction::CloseMenu => self.menu = self.menu.closed(),
            PageAction::Scrolled { y, bands } => {
                self.header = HeaderState::at(y);
                self.active_sections = active_sections(&bands, y);
            }
            PageAction::ToggleCard(index) => {
                if let Some(card) = self.cards.get_mut(index) {
                    *card = card.toggled();
                }
            }
            PageAction::SubmitContact => self.contact = ContactPanel::Success,
            PageAction::ResetContact => self.contact = ContactPanel::Fields,
        }
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        self.active_sections
            .iter()
            .any(|section| link_targets(href, section))
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        // Scroll fires constantly; only re-render when something visible changed.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> Vec<SectionBand> {
        vec![
            SectionBand::from_layout("home", 0.0, 700.0),
            SectionBand::from_layout("packages", 700.0, 900.0),
        ]
    }

    #[test]
    fn toggling_one_card_leaves_siblings_alone() {
        let mut state = PageState::with_cards(3);
        state.apply(PageAction::ToggleCard(1));

        assert_eq!(state.cards[0], CardState::Collapsed);
        assert_eq!(state.cards[1], CardState::Expanded);
        assert_eq!(state.cards[2], CardState::Collapsed);
        assert_eq!(state.cards[0].toggle_label(), "See More");
        assert_eq!(state.cards[1].toggle_label(), "See Less");

        state.apply(PageAction::ToggleCard(1));
        assert_eq!(state, PageState::with_cards(3));
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut state = PageState::with_cards(2);
        state.apply(PageAction::ToggleCard(7));
        assert_eq!(state, PageState::with_cards(2));
    }

    #[test]
    fn nav_link_click_always_closes_menu() {
        let mut state = PageState::default();
        state.apply(PageAction::CloseMenu);
        assert!(!state.menu.is_open());

        state.apply(PageAction::ToggleMenu);
        assert!(state.menu.is_open());
        state.apply(PageAction::CloseMenu);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn submit_shows_success_regardless_of_fields() {
        let mut state = PageState::default();
        state.apply(PageAction::SubmitContact);
        assert_eq!(state.contact, ContactPanel::Success);
        assert_eq!(state.contact.fields_display(), "display: none;");

        state.apply(PageAction::ResetContact);
        assert_eq!(state.contact, ContactPanel::Fields);
    }

    #[test]
    fn scrolling_updates_header_and_spy() {
        let mut state = PageState::default();
        state.apply(PageAction::Scrolled { y: 20.0, bands: bands() });
        assert_eq!(state.header, HeaderState::Static);
        assert!(state.is_link_active("#home"));
        assert!(!state.is_link_active("#packages"));

        state.apply(PageAction::Scrolled { y: 900.0, bands: bands() });
        assert_eq!(state.header, HeaderState::Stuck);
        assert!(!state.is_link_active("#home"));
        assert!(state.is_link_active("#packages"));
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let toggled = next.reduce(PageAction::ToggleMenu);
        assert!(toggled.menu.is_open());
    }
}
