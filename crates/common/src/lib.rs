//! Common types used across the browser shell.

pub mod error;

pub use error::{BrowserError, BrowserResult};
