//! Browser UI shell.
//!
//! This crate provides the tabbed browser chrome including:
//! - Window state and tab lifecycle
//! - Tab strip with close and rename
//! - Address bar
//! - Navigation controls and URL normalization
//! - Insecure-connection prompting

pub mod address_bar;
pub mod navigation;
pub mod security;
pub mod settings;
pub mod tab;
pub mod tab_strip;
pub mod window;

pub use settings::BrowserSettings;
pub use tab::{Tab, TabId};
pub use window::BrowserWindow;
