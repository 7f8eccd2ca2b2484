/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A menu link was followed, or a click landed outside the menu and its
    /// button.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a document click; `inside` covers both the menu and its button.
    pub fn on_document_click(&mut self, inside: bool) {
        if !inside {
            self.close();
        }
    }

    /// Rotation of the menu icon in degrees.
    pub fn icon_rotation(&self) -> u16 {
        if self.open { 90 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_outside_click() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon_rotation(), 90);

        menu.on_document_click(true);
        assert!(menu.is_open());

        menu.on_document_click(false);
        assert!(!menu.is_open());
        assert_eq!(menu.icon_rotation(), 0);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::new();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
