//! Browser tab.

use webview::WebView;

/// Stable identity for a tab, independent of its strip position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabId(pub u64);

/// A tab pairing a user-facing label with its web view.
///
/// The label is set at creation and only changes through an explicit
/// rename; navigation never retitles a tab.
pub struct Tab {
    /// Tab ID.
    id: TabId,
    /// Display label.
    label: String,
    /// Owned web view.
    view: Box<dyn WebView>,
}

impl Tab {
    pub fn new(id: TabId, view: Box<dyn WebView>) -> Self {
        Self {
            id,
            label: "New Tab".to_string(),
            view,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Current address of the tab's view.
    pub fn url(&self) -> String {
        self.view.current_url()
    }

    pub fn view_mut(&mut self) -> &mut dyn WebView {
        self.view.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webview::HeadlessWebView;

    #[test]
    fn test_tab_creation() {
        let tab = Tab::new(TabId(1), Box::new(HeadlessWebView::new()));
        assert_eq!(tab.id(), TabId(1));
        assert_eq!(tab.label(), "New Tab");
        assert_eq!(tab.url(), "about:blank");
    }

    #[test]
    fn test_label_is_independent_of_navigation() {
        let mut tab = Tab::new(TabId(1), Box::new(HeadlessWebView::new()));
        tab.set_label("Work");

        tab.view_mut().load("https://example.com");

        assert_eq!(tab.label(), "Work");
        assert_eq!(tab.url(), "https://example.com");
    }
}
