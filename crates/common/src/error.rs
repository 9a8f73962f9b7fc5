//! Common error types.

use thiserror::Error;

/// Main error type for the browser shell.
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;

impl BrowserError {
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}
