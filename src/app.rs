//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::file_io::{FileDialogs, NativeDialogs};
use crate::core::session::Session;
use crate::ui::{alert::AlertWindow, editor::EditorPanel};

const FONT_STEP: f32 = 1.0;

/// Document action requested from a button, menu entry or shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    New,
    Import,
    Export,
}

/// Main application state
pub struct TextualApp {
    /// Document and editor state
    pub session: Session,
    /// Application configuration
    pub config: AppConfig,
    /// File pickers
    dialogs: Box<dyn FileDialogs>,
    /// Window title last sent to the viewport
    window_title: String,
    /// Font size and theme need to be pushed to egui
    style_dirty: bool,
}

impl TextualApp {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self::with_dialogs(config, Box::new(NativeDialogs))
    }

    pub fn with_dialogs(config: AppConfig, dialogs: Box<dyn FileDialogs>) -> Self {
        Self {
            session: Session::new(config.last_directory.clone()),
            config,
            dialogs,
            window_title: String::new(),
            style_dirty: true,
        }
    }

    /// Run a document action
    fn apply(&mut self, action: Action) {
        let done = match action {
            Action::New => {
                self.session.new_document();
                false
            }
            Action::Import => self.session.import_with(self.dialogs.as_mut()),
            Action::Export => self.session.export_with(self.dialogs.as_mut()),
        };

        if done {
            self.remember_directory();
        }
    }

    /// Run an action picked during a frame and redraw with its outcome.
    ///
    /// Import and export block on the native dialog, so the frame that
    /// started them is stale once they return.
    fn run_action(&mut self, ctx: &egui::Context, action: Action) {
        self.apply(action);
        ctx.request_repaint();
    }

    /// Persist the directory of the last imported or exported file
    fn remember_directory(&mut self) {
        let dir = self.session.last_directory().map(|d| d.to_path_buf());
        if dir != self.config.last_directory {
            self.config.last_directory = dir;
            self.save_config();
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {:#}", e);
        }
    }

    fn adjust_font_size(&mut self, delta: f32) {
        self.config.editor.adjust_font_size(delta);
        self.style_dirty = true;
        self.save_config();
    }

    fn set_dark_mode(&mut self, dark: bool) {
        self.config.ui.set_dark(dark);
        self.style_dirty = true;
        self.save_config();
    }

    /// Push font size and theme to egui
    fn apply_style(&mut self, ctx: &egui::Context) {
        if !self.style_dirty {
            return;
        }
        self.style_dirty = false;

        ctx.set_theme(if self.config.ui.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let size = self.config.editor.font_size;
        ctx.style_mut(|style| {
            style
                .text_styles
                .insert(egui::TextStyle::Monospace, egui::FontId::monospace(size));
            style
                .text_styles
                .insert(egui::TextStyle::Heading, egui::FontId::proportional(size * 1.4));
        });
    }

    /// Keep the native window title in sync with the document
    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.session.window_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    /// Keyboard shortcuts, ignored while an alert is open
    fn read_shortcuts(&mut self, ctx: &egui::Context) -> Option<Action> {
        if self.session.alert().is_some() {
            return None;
        }

        let (action, font_delta) = ctx.input(|i| {
            let mut action = None;
            let mut font_delta = 0.0;
            if i.modifiers.command {
                if i.key_pressed(egui::Key::N) {
                    action = Some(Action::New);
                } else if i.key_pressed(egui::Key::O) {
                    action = Some(Action::Import);
                } else if i.key_pressed(egui::Key::S) {
                    action = Some(Action::Export);
                }
                if i.key_pressed(egui::Key::Equals) || i.key_pressed(egui::Key::Plus) {
                    font_delta += FONT_STEP;
                }
                if i.key_pressed(egui::Key::Minus) {
                    font_delta -= FONT_STEP;
                }
            }
            (action, font_delta)
        });

        if font_delta != 0.0 {
            self.adjust_font_size(font_delta);
        }
        action
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context, blocked: bool) -> Option<Action> {
        let mut action = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        action = Some(Action::New);
                        ui.close();
                    }
                    if ui.button("Import...").clicked() {
                        action = Some(Action::Import);
                        ui.close();
                    }
                    if ui.button("Export...").clicked() {
                        action = Some(Action::Export);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut dark = self.config.ui.is_dark();
                    if ui.checkbox(&mut dark, "Dark Mode").changed() {
                        self.set_dark_mode(dark);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Larger Text").clicked() {
                        self.adjust_font_size(FONT_STEP);
                    }
                    if ui.button("Smaller Text").clicked() {
                        self.adjust_font_size(-FONT_STEP);
                    }
                });
            });
        });
        action
    }
}

impl eframe::App for TextualApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);

        // Panels stay visible but inert behind a pending alert
        let blocked = self.session.alert().is_some();
        let mut action = self.read_shortcuts(ctx);

        if let Some(picked) = self.render_menu_bar(ctx, blocked) {
            action = Some(picked);
        }

        // Footer before the central panel so the body takes the remaining space
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            if let Some(picked) = EditorPanel::show_footer(ui, &mut self.session) {
                action = Some(picked);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            EditorPanel::show_body(ui, &mut self.session);
        });

        if let Some(action) = action {
            self.run_action(ctx, action);
        }

        AlertWindow::show(ctx, &mut self.session);

        self.sync_window_title(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    /// Dialogs that always pick the same path
    struct FixedDialogs(PathBuf);

    impl FileDialogs for FixedDialogs {
        fn pick_import(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
            Some(self.0.clone())
        }

        fn pick_export(&mut self, _default_name: &str, _start_dir: Option<&Path>) -> Option<PathBuf> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn test_failed_action_requests_repaint() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let mut app = TextualApp::with_dialogs(AppConfig::default(), Box::new(FixedDialogs(missing)));

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});
        app.run_action(&ctx, Action::Import);

        assert_eq!(app.session.alert().unwrap().title, "Error importing file");
        assert!(ctx.has_requested_repaint());
    }

    #[test]
    fn test_new_action_resets_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = TextualApp::with_dialogs(
            AppConfig::default(),
            Box::new(FixedDialogs(dir.path().join("unused.txt"))),
        );
        app.session.set_body("scratch".to_string());

        let ctx = egui::Context::default();
        app.run_action(&ctx, Action::New);

        assert_eq!(app.session.document().body, "");
        assert!(app.session.alert().is_none());
    }
}
