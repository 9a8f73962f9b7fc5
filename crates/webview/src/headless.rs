//! In-process web view used by tests and headless runs.

use tracing::debug;

use crate::history::NavigationHistory;
use crate::view::{EventHandler, WebView, WebViewEvent};

/// Address reported before the first load.
const BLANK_URL: &str = "about:blank";

/// A web view that records navigation without rendering anything.
///
/// Loads resolve synchronously: `load`, a successful `back`/`forward`, and
/// `reload` of a loaded page each emit [`WebViewEvent::UrlChanged`] to the
/// registered handler, the same way a real engine binding reports address
/// changes.
pub struct HeadlessWebView {
    /// Engine-owned back/forward history.
    history: NavigationHistory,
    /// Registered event handler.
    handler: Option<EventHandler>,
}

impl HeadlessWebView {
    /// Create a blank view.
    pub fn new() -> Self {
        Self {
            history: NavigationHistory::new(),
            handler: None,
        }
    }

    fn emit_url_changed(&mut self) {
        let url = self.current_url();
        if let Some(handler) = self.handler.as_mut() {
            handler(WebViewEvent::UrlChanged(url));
        }
    }
}

impl Default for HeadlessWebView {
    fn default() -> Self {
        Self::new()
    }
}

impl WebView for HeadlessWebView {
    fn load(&mut self, url: &str) {
        debug!("Headless view loading {}", url);
        self.history.push(url.to_string());
        self.emit_url_changed();
    }

    fn back(&mut self) {
        if self.history.go_back().is_some() {
            self.emit_url_changed();
        }
    }

    fn forward(&mut self) {
        if self.history.go_forward().is_some() {
            self.emit_url_changed();
        }
    }

    fn reload(&mut self) {
        if self.history.current().is_some() {
            self.emit_url_changed();
        }
    }

    fn current_url(&self) -> String {
        self.history.current().unwrap_or(BLANK_URL).to_string()
    }

    fn on_event(&mut self, handler: EventHandler) {
        self.handler = Some(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_view() -> (HeadlessWebView, Rc<RefCell<Vec<WebViewEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut view = HeadlessWebView::new();
        view.on_event(Box::new(move |event| sink.borrow_mut().push(event)));
        (view, events)
    }

    #[test]
    fn test_blank_before_first_load() {
        let view = HeadlessWebView::new();
        assert_eq!(view.current_url(), "about:blank");
    }

    #[test]
    fn test_load_emits_url_changed() {
        let (mut view, events) = recording_view();

        view.load("https://example.com");

        assert_eq!(view.current_url(), "https://example.com");
        assert_eq!(
            *events.borrow(),
            vec![WebViewEvent::UrlChanged("https://example.com".to_string())]
        );
    }

    #[test]
    fn test_back_and_forward_emit() {
        let (mut view, events) = recording_view();

        view.load("https://a.com");
        view.load("https://b.com");

        view.back();
        assert_eq!(view.current_url(), "https://a.com");

        view.forward();
        assert_eq!(view.current_url(), "https://b.com");
        assert_eq!(events.borrow().len(), 4);
    }

    #[test]
    fn test_traversal_without_history_is_silent() {
        let (mut view, events) = recording_view();

        view.back();
        view.forward();
        view.reload();

        assert!(events.borrow().is_empty());
        assert_eq!(view.current_url(), "about:blank");
    }

    #[test]
    fn test_reload_reemits_current() {
        let (mut view, events) = recording_view();

        view.load("https://example.com");
        view.reload();

        assert_eq!(events.borrow().len(), 2);
        assert_eq!(view.current_url(), "https://example.com");
    }
}
