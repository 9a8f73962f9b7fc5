//! Address bar component.

use std::mem;

/// Address bar state.
///
/// Holds the last committed URL plus the in-progress edit buffer. While
/// the field has keyboard focus, programmatic URL updates are withheld so
/// navigation events in the active tab cannot clobber a half-typed
/// address.
pub struct AddressBar {
    /// Last committed URL.
    url: String,
    /// In-progress input text.
    input: String,
    /// Whether the field has keyboard focus.
    focused: bool,
    /// Focus move requested for the next frame.
    focus_requested: bool,
}

impl AddressBar {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            input: String::new(),
            focused: false,
            focus_requested: false,
        }
    }

    /// URL last reported by the active tab.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reflect a navigation in the bar unless the user is editing it.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        if !self.focused {
            self.input = self.url.clone();
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Ask the next frame to move keyboard focus into the bar.
    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Consume a pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        mem::take(&mut self.focus_requested)
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_bar_creation() {
        let bar = AddressBar::new();
        assert_eq!(bar.url(), "");
        assert_eq!(bar.input(), "");
        assert!(!bar.is_focused());
    }

    #[test]
    fn test_set_url_updates_input_when_unfocused() {
        let mut bar = AddressBar::new();
        bar.set_url("https://example.com");
        assert_eq!(bar.url(), "https://example.com");
        assert_eq!(bar.input(), "https://example.com");
    }

    #[test]
    fn test_set_url_preserves_input_while_editing() {
        let mut bar = AddressBar::new();
        bar.set_focused(true);
        bar.set_input("exa");

        bar.set_url("https://other.com");

        assert_eq!(bar.url(), "https://other.com");
        assert_eq!(bar.input(), "exa");
    }
}
