//! Oriel Browser - a minimal tabbed browser shell written in Rust.

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use browser::app::WINDOW_TITLE;
use browser::BrowserApp;
use common::BrowserError;
use ui::BrowserWindow;

/// Oriel Browser - a minimal tabbed browser shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to open in the first tab
    url: Option<String>,

    /// Run without opening a native window
    #[arg(long)]
    headless: bool,

    /// Start with a normal window instead of maximized
    #[arg(long)]
    windowed: bool,

    /// Window width when --windowed is set
    #[arg(long, default_value = "1280")]
    width: f32,

    /// Window height when --windowed is set
    #[arg(long, default_value = "800")]
    height: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Oriel Browser v{}", browser::VERSION);

    let mut window = BrowserWindow::new();
    if let Some(url) = args.url.as_deref() {
        info!("Opening: {}", url);
        window.open_url(url)?;
    }

    if args.headless {
        return run_headless(window);
    }

    let viewport = if args.windowed {
        egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([args.width, args.height])
    } else {
        egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_maximized(true)
    };
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = BrowserApp::with_window(window);
    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| BrowserError::window(err.to_string()))?;

    info!("Browser shutdown complete");
    Ok(())
}

/// Exercise the shell without opening a native window.
fn run_headless(mut window: BrowserWindow) -> Result<()> {
    window.pump_events();
    info!("Headless shell with {} tab(s)", window.strip().count());
    for (index, tab) in window.strip().iter().enumerate() {
        info!("  tab {}: {} ({})", index, tab.label(), tab.url());
    }
    Ok(())
}
