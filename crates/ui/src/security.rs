//! Insecure-connection prompting.

/// Title of the insecure-connection dialog.
pub const WARNING_TITLE: &str = "Insecure Connection";

/// Body of the insecure-connection dialog.
pub const WARNING_MESSAGE: &str = "This address uses http://, not https://. The connection \
will not be encrypted and the site may not be safe. Continue anyway?";

/// A navigation held back until the user answers the insecure-connection
/// prompt. The page is not contacted while the prompt is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLoad {
    /// Normalized target URL.
    pub url: String,
}

impl PendingLoad {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// The user's answer to the insecure-connection prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptChoice {
    Continue,
    Cancel,
}
