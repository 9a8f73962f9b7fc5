//! Oriel Browser - a minimal tabbed browser shell written in Rust.
//!
//! This crate wires the UI shell into a desktop application:
//! - The egui-based window chrome
//! - Keyboard shortcuts
//! - The insecure-connection and rename dialogs

pub mod app;

pub use app::BrowserApp;

/// Browser version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
