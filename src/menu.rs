//! Navigation Menu State
//!
//! Open/closed state for the mobile hamburger menu.

/// Mobile menu open/closed state. Closed on page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed (hamburger click)
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed (link click or outside click)
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the trigger's aria-expanded attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_even_toggle_count_restores_state() {
        let mut menu = MenuState::default();
        for _ in 0..6 {
            menu.toggle();
        }
        assert_eq!(menu, MenuState::default());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
