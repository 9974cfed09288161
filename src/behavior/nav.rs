/// Whether the mobile navigation menu is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Following a nav link always closes the menu, whatever it was before.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Class carried by `#nav-menu`.
    pub fn menu_class(self) -> Option<&'static str> {
        self.is_open().then_some("show-menu")
    }

    /// Class carried by `#nav-toggle` itself.
    pub fn toggle_class(self) -> Option<&'static str> {
        self.is_open().then_some("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_classes() {
        let start = MenuState::default();
        let once = start.toggled();
        assert_eq!(once.menu_class(), Some("show-menu"));
        assert_eq!(once.toggle_class(), Some("active"));

        let twice = once.toggled();
        assert_eq!(twice, start);
        assert_eq!(twice.menu_class(), None);
        assert_eq!(twice.toggle_class(), None);
    }

    #[test]
    fn closing_is_idempotent() {
        for state in [MenuState::Open, MenuState::Closed] {
            let closed = state.closed();
            assert!(!closed.is_open());
            assert_eq!(closed.closed(), closed);
        }
    }
}
