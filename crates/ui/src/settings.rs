//! Browser settings.

/// Page opened by new tabs and the Home button.
pub const DEFAULT_HOME_PAGE: &str = "https://www.google.com";

/// User-tunable browser configuration.
#[derive(Clone, Debug)]
pub struct BrowserSettings {
    /// Start page for new tabs and the Home action.
    pub home_page: String,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            home_page: DEFAULT_HOME_PAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_page() {
        let settings = BrowserSettings::default();
        assert_eq!(settings.home_page, "https://www.google.com");
    }
}
