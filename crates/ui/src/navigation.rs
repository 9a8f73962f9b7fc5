//! Navigation controls and address input handling.
//!
//! Typed addresses are normalized with a deliberately simple rule: anything
//! that does not already start with `http` gets an `http://` prefix. The
//! scheme check is a plain prefix test, so `https://...` and even a host
//! like `httpd.apache.org` pass through unchanged.

/// Toolbar navigation actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationAction {
    Back,
    Forward,
    Reload,
    Home,
}

/// Normalize raw address-bar input into a loadable URL.
///
/// Whitespace is trimmed first; empty input yields `None`.
pub fn normalize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{}", trimmed))
    }
}

/// Whether a normalized URL uses cleartext HTTP.
pub fn is_insecure(url: &str) -> bool {
    url.starts_with("http://")
}
