//! egui application shell.

use eframe::egui;

use ui::navigation::NavigationAction;
use ui::security::{self, PromptChoice};
use ui::window::KeyboardShortcut;
use ui::BrowserWindow;

/// Native window title.
pub const WINDOW_TITLE: &str = "Oriel Browser";

/// An in-progress tab rename.
struct RenameDialog {
    /// Strip index of the tab being renamed.
    index: usize,
    /// Edited label text.
    name: String,
}

/// What the tab strip asked for this frame.
enum TabStripAction {
    None,
    Activate(usize),
    Close(usize),
    Rename(usize),
    NewTab,
}

/// The eframe application: owns the window state and draws the chrome
/// each frame.
pub struct BrowserApp {
    /// Shell state.
    window: BrowserWindow,
    /// Open rename dialog, if any.
    rename: Option<RenameDialog>,
}

impl BrowserApp {
    pub fn new() -> Self {
        Self::with_window(BrowserWindow::new())
    }

    /// Wrap an already-configured window, e.g. one that loaded a
    /// command-line URL.
    pub fn with_window(window: BrowserWindow) -> Self {
        Self {
            window,
            rename: None,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Dialogs own the keyboard while open.
        if self.window.pending_load().is_some() || self.rename.is_some() {
            return;
        }
        let bindings = [
            (
                egui::Modifiers::COMMAND,
                egui::Key::T,
                KeyboardShortcut::NewTab,
            ),
            (
                egui::Modifiers::COMMAND,
                egui::Key::W,
                KeyboardShortcut::CloseTab,
            ),
            (
                egui::Modifiers::COMMAND,
                egui::Key::R,
                KeyboardShortcut::Reload,
            ),
            (
                egui::Modifiers::COMMAND,
                egui::Key::L,
                KeyboardShortcut::FocusAddressBar,
            ),
            (
                egui::Modifiers::ALT,
                egui::Key::ArrowLeft,
                KeyboardShortcut::Back,
            ),
            (
                egui::Modifiers::ALT,
                egui::Key::ArrowRight,
                KeyboardShortcut::Forward,
            ),
        ];
        for (modifiers, key, shortcut) in bindings {
            if ctx.input_mut(|input| input.consume_key(modifiers, key)) {
                self.window.handle_shortcut(shortcut);
            }
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut action = None;
                for (label, candidate) in [
                    ("Back", NavigationAction::Back),
                    ("Forward", NavigationAction::Forward),
                    ("Reload", NavigationAction::Reload),
                    ("Home", NavigationAction::Home),
                ] {
                    if ui.button(label).clicked() {
                        action = Some(candidate);
                    }
                }
                if let Some(action) = action {
                    self.window.apply_navigation(action);
                }

                let width = (ui.available_width() - 40.0).max(120.0);
                let response = ui.add(
                    egui::TextEdit::singleline(self.window.address_bar_mut().input_mut())
                        .desired_width(width)
                        .hint_text("Enter address"),
                );
                if self.window.address_bar_mut().take_focus_request() {
                    response.request_focus();
                }
                let submitted = response.lost_focus()
                    && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if submitted {
                    self.window.navigate();
                }
                self.window.address_bar_mut().set_focused(response.has_focus());

                if ui.button("+").on_hover_text("New tab").clicked() {
                    self.window.add_tab(None);
                }
            });
        });
    }

    fn tab_strip(&mut self, ctx: &egui::Context) {
        let mut action = TabStripAction::None;
        egui::TopBottomPanel::top("tab_strip").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let active = self.window.strip().active_index();
                for (index, tab) in self.window.strip().iter().enumerate() {
                    let response = ui.selectable_label(index == active, tab.label());
                    if response.double_clicked() {
                        action = TabStripAction::NewTab;
                    } else if response.clicked() {
                        action = TabStripAction::Activate(index);
                    }
                    response.context_menu(|ui| {
                        if ui.button("Rename Tab…").clicked() {
                            action = TabStripAction::Rename(index);
                            ui.close_menu();
                        }
                    });
                    if ui.small_button("x").on_hover_text("Close tab").clicked() {
                        action = TabStripAction::Close(index);
                    }
                }
                // Double-clicking the empty strip also opens a tab.
                let (_, response) = ui.allocate_exact_size(
                    egui::Vec2::new(ui.available_width().max(0.0), ui.available_height()),
                    egui::Sense::click(),
                );
                if response.double_clicked() {
                    action = TabStripAction::NewTab;
                }
            });
        });

        match action {
            TabStripAction::None => {}
            TabStripAction::Activate(index) => self.window.set_active_tab(index),
            TabStripAction::Close(index) => self.window.close_tab(index),
            TabStripAction::Rename(index) => {
                let name = self
                    .window
                    .strip()
                    .get(index)
                    .map(|tab| tab.label().to_string())
                    .unwrap_or_default();
                self.rename = Some(RenameDialog { index, name });
            }
            TabStripAction::NewTab => {
                self.window.add_tab(None);
            }
        }
    }

    fn viewport(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tab) = self.window.strip().active_tab() {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.35);
                    ui.heading(tab.label());
                    ui.monospace(tab.url());
                    ui.weak("Rendering engine not attached");
                });
            }
        });
    }

    fn security_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.window.pending_load() else {
            return;
        };
        let url = pending.url.clone();

        let mut choice = None;
        let modal = egui::Modal::new(egui::Id::new("security_prompt")).show(ctx, |ui| {
            ui.heading(security::WARNING_TITLE);
            ui.add_space(8.0);
            ui.monospace(&url);
            ui.label(security::WARNING_MESSAGE);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let cancel = ui.button("Cancel");
                // Cancel is the default: focus it when the prompt opens so
                // Enter declines.
                if ui.memory(|memory| memory.focused()).is_none() {
                    cancel.request_focus();
                }
                if cancel.clicked() {
                    choice = Some(PromptChoice::Cancel);
                }
                if ui.button("Continue").clicked() {
                    choice = Some(PromptChoice::Continue);
                }
            });
        });
        // Clicking outside or pressing Escape declines the load.
        if modal.should_close() {
            choice = Some(PromptChoice::Cancel);
        }

        if let Some(choice) = choice {
            self.window.resolve_prompt(choice);
        }
    }

    fn rename_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.rename.as_mut() else {
            return;
        };

        let mut submitted = false;
        let mut cancelled = false;
        let modal = egui::Modal::new(egui::Id::new("rename_tab")).show(ctx, |ui| {
            ui.heading("Rename Tab");
            ui.add_space(8.0);
            let response = ui.text_edit_singleline(&mut dialog.name);
            response.request_focus();
            if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });
        if modal.should_close() {
            cancelled = true;
        }

        if submitted {
            if let Some(dialog) = self.rename.take() {
                self.window.rename_tab(dialog.index, &dialog.name);
            }
        } else if cancelled {
            self.rename = None;
        }
    }
}

impl Default for BrowserApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.pump_events();
        self.handle_shortcuts(ctx);
        self.toolbar(ctx);
        self.tab_strip(ctx);
        self.viewport(ctx);
        self.security_dialog(ctx);
        self.rename_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_with_single_tab() {
        let app = BrowserApp::new();
        assert_eq!(app.window.strip().count(), 1);
        assert!(app.rename.is_none());
    }

    #[test]
    fn test_with_window_keeps_state() {
        let mut window = BrowserWindow::new();
        window.add_tab(None);

        let app = BrowserApp::with_window(window);
        assert_eq!(app.window.strip().count(), 2);
    }

    fn frame_input() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 800.0),
            )),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_enter_resolves_to_cancel() {
        let mut app = BrowserApp::new();
        app.window.address_bar_mut().set_input("http://example.com");
        app.window.navigate();
        assert!(app.window.pending_load().is_some());

        let ctx = egui::Context::default();

        // First frame opens the prompt and parks focus on Cancel.
        let _ = ctx.run(frame_input(), |ctx| app.security_dialog(ctx));
        assert!(ctx.memory(|memory| memory.focused()).is_some());

        // Enter on the freshly opened prompt declines the load.
        let mut input = frame_input();
        input.events.push(egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        });
        let _ = ctx.run(input, |ctx| app.security_dialog(ctx));

        assert!(app.window.pending_load().is_none());
        assert_eq!(
            app.window.strip().active_tab().map(|tab| tab.url()),
            Some("https://www.google.com".to_string())
        );
    }
}
