//! Embedded web-view seam.
//!
//! The shell treats the web-rendering engine as an opaque collaborator:
//! - `WebView` is the capability surface the shell drives
//! - `WebViewEvent` is what the engine reports back
//! - `HeadlessWebView` is the in-process stand-in used by tests and
//!   headless runs

pub mod headless;
pub mod history;
pub mod view;

pub use headless::HeadlessWebView;
pub use history::NavigationHistory;
pub use view::{EventHandler, WebView, WebViewEvent};
