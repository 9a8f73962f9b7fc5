//! Browser window.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info};
use url::Url;

use common::{BrowserError, BrowserResult};
use webview::{HeadlessWebView, WebView, WebViewEvent};

use crate::address_bar::AddressBar;
use crate::navigation::{self, NavigationAction};
use crate::security::{PendingLoad, PromptChoice};
use crate::settings::BrowserSettings;
use crate::tab::{Tab, TabId};
use crate::tab_strip::TabStrip;

/// Constructor for the web views backing new tabs.
pub type WebViewFactory = Box<dyn Fn() -> Box<dyn WebView>>;

/// An event raised by one tab's web view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEvent {
    /// Originating tab.
    pub tab: TabId,
    /// What the view reported.
    pub event: WebViewEvent,
}

/// Window-level keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardShortcut {
    NewTab,
    CloseTab,
    Reload,
    Back,
    Forward,
    FocusAddressBar,
}

/// Top-level browser window: the tab strip, the address bar, and the
/// insecure-connection gate.
///
/// Web views report navigations through a per-tab event channel; the
/// window drains it with [`BrowserWindow::pump_events`] and mirrors only
/// the active tab's address into the address bar.
pub struct BrowserWindow {
    /// Tab strip.
    strip: TabStrip,
    /// Address bar.
    address_bar: AddressBar,
    /// Browser settings.
    settings: BrowserSettings,
    /// Load awaiting prompt confirmation.
    pending_load: Option<PendingLoad>,
    /// Source of unique tab ids.
    tab_counter: u64,
    /// Web-view constructor for new tabs.
    factory: WebViewFactory,
    /// Sender cloned into each view's event handler.
    events_tx: Sender<TabEvent>,
    /// Queue drained by `pump_events`.
    events_rx: Receiver<TabEvent>,
}

impl BrowserWindow {
    /// Create a window with one tab showing the home page.
    pub fn new() -> Self {
        Self::with_webview_factory(Box::new(|| Box::new(HeadlessWebView::new())))
    }

    /// Create a window whose tabs get views from `factory`.
    pub fn with_webview_factory(factory: WebViewFactory) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let mut window = Self {
            strip: TabStrip::new(),
            address_bar: AddressBar::new(),
            settings: BrowserSettings::default(),
            pending_load: None,
            tab_counter: 0,
            factory,
            events_tx,
            events_rx,
        };
        window.add_tab(None);
        window
    }

    /// Open a new tab and make it active. Returns its index.
    ///
    /// A missing or unparseable URL falls back to the home page.
    pub fn add_tab(&mut self, url: Option<&str>) -> usize {
        let target = url
            .filter(|candidate| Url::parse(candidate).is_ok())
            .unwrap_or(&self.settings.home_page)
            .to_string();

        self.tab_counter += 1;
        let id = TabId(self.tab_counter);
        let mut view = (self.factory)();
        let events = self.events_tx.clone();
        view.on_event(Box::new(move |event| {
            let _ = events.send(TabEvent { tab: id, event });
        }));
        view.load(&target);

        let index = self.strip.add(Tab::new(id, view));
        info!("Opened tab {} at {}", index, target);
        self.sync_address_bar();
        index
    }

    /// Close the tab at `index`. The last remaining tab stays open.
    pub fn close_tab(&mut self, index: usize) {
        let before = self.strip.count();
        self.strip.close(index);
        if self.strip.count() != before {
            info!("Closed tab {}", index);
            self.sync_address_bar();
        }
    }

    /// Relabel the tab at `index`. Empty names are ignored.
    pub fn rename_tab(&mut self, index: usize, name: &str) {
        self.strip.rename(index, name);
    }

    pub fn set_active_tab(&mut self, index: usize) {
        self.strip.set_active(index);
        self.sync_address_bar();
    }

    /// Navigate the active tab to the address-bar input.
    ///
    /// Cleartext `http://` targets are held behind the confirmation
    /// prompt instead of loading right away.
    pub fn navigate(&mut self) {
        let Some(url) = navigation::normalize_input(self.address_bar.input()) else {
            return;
        };
        // Any accepted submission supersedes a load still held at the prompt.
        self.pending_load = None;
        if navigation::is_insecure(&url) {
            debug!("Prompting before insecure load of {}", url);
            self.pending_load = Some(PendingLoad::new(url));
        } else {
            self.load_in_active(&url);
        }
    }

    /// Resolve the insecure-connection prompt.
    ///
    /// Continue performs the held load; Cancel discards it and the tab
    /// stays where it was.
    pub fn resolve_prompt(&mut self, choice: PromptChoice) {
        let Some(pending) = self.pending_load.take() else {
            return;
        };
        match choice {
            PromptChoice::Continue => self.load_in_active(&pending.url),
            PromptChoice::Cancel => debug!("Cancelled insecure load of {}", pending.url),
        }
    }

    /// The load currently awaiting prompt confirmation, if any.
    pub fn pending_load(&self) -> Option<&PendingLoad> {
        self.pending_load.as_ref()
    }

    pub fn apply_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Back => self.back(),
            NavigationAction::Forward => self.forward(),
            NavigationAction::Reload => self.reload(),
            NavigationAction::Home => self.home(),
        }
    }

    pub fn back(&mut self) {
        if let Some(tab) = self.strip.active_tab_mut() {
            tab.view_mut().back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(tab) = self.strip.active_tab_mut() {
            tab.view_mut().forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.strip.active_tab_mut() {
            tab.view_mut().reload();
        }
    }

    /// Load the home page in the active tab.
    ///
    /// This is a direct load: the insecure-connection prompt only guards
    /// typed addresses.
    pub fn home(&mut self) {
        let home = self.settings.home_page.clone();
        self.load_in_active(&home);
    }

    /// Load a caller-supplied URL (e.g. from the command line) in the
    /// active tab after checking that it parses.
    pub fn open_url(&mut self, url: &str) -> BrowserResult<()> {
        Url::parse(url)?;
        self.strip
            .active_tab()
            .ok_or_else(|| BrowserError::invalid("no active tab"))?;
        self.load_in_active(url);
        Ok(())
    }

    /// Apply a window-level keyboard shortcut.
    pub fn handle_shortcut(&mut self, shortcut: KeyboardShortcut) {
        match shortcut {
            KeyboardShortcut::NewTab => {
                self.add_tab(None);
            }
            KeyboardShortcut::CloseTab => self.close_tab(self.strip.active_index()),
            KeyboardShortcut::Reload => self.reload(),
            KeyboardShortcut::Back => self.back(),
            KeyboardShortcut::Forward => self.forward(),
            KeyboardShortcut::FocusAddressBar => self.address_bar.request_focus(),
        }
    }

    /// Drain queued web-view events into window state.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.on_tab_event(event);
        }
    }

    fn on_tab_event(&mut self, event: TabEvent) {
        // Only the active tab drives the address bar.
        if self.strip.active_tab().map(Tab::id) != Some(event.tab) {
            return;
        }
        match event.event {
            WebViewEvent::UrlChanged(url) => self.address_bar.set_url(url),
        }
    }

    fn load_in_active(&mut self, url: &str) {
        let index = self.strip.active_index();
        if let Some(tab) = self.strip.active_tab_mut() {
            tab.view_mut().load(url);
            info!("Loaded {} in tab {}", url, index);
        }
    }

    fn sync_address_bar(&mut self) {
        if let Some(tab) = self.strip.active_tab() {
            let url = tab.url();
            self.address_bar.set_url(url);
        }
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn address_bar(&self) -> &AddressBar {
        &self.address_bar
    }

    pub fn address_bar_mut(&mut self) -> &mut AddressBar {
        &mut self.address_bar
    }
}

impl Default for BrowserWindow {
    fn default() -> Self {
        Self::new()
    }
}
