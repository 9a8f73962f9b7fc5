//! Web-view capability surface.

/// Event emitted by a web view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebViewEvent {
    /// The displayed address changed (load, redirect, history traversal).
    UrlChanged(String),
}

/// Callback registered for a web view's events.
pub type EventHandler = Box<dyn FnMut(WebViewEvent)>;

/// An embedded web-rendering view.
///
/// Page loading, rendering, scripting, and back/forward history all live
/// behind this trait; the shell only issues commands and consumes events.
pub trait WebView {
    /// Begin navigating to `url`.
    fn load(&mut self, url: &str);

    /// Go back one history entry, if any.
    fn back(&mut self);

    /// Go forward one history entry, if any.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// Last-known displayed address.
    fn current_url(&self) -> String;

    /// Register the handler invoked on [`WebViewEvent`]s.
    ///
    /// A view has at most one handler; registering replaces any previous
    /// one.
    fn on_event(&mut self, handler: EventHandler);
}
