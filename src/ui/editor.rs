//! Body and title editors with the document actions

use eframe::egui;

use crate::app::Action;
use crate::core::session::Session;

/// Text editing area and action toolbar
pub struct EditorPanel;

impl EditorPanel {
    /// Show the body editor, filling the available space
    pub fn show_body(ui: &mut egui::Ui, session: &mut Session) {
        egui::ScrollArea::vertical()
            .id_salt("body_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut body = session.document().body.clone();
                let response = egui::TextEdit::multiline(&mut body)
                    .id_salt("body")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .frame(false)
                    .show(ui);

                if response.response.changed() {
                    session.set_body(body);
                }
            });
    }

    /// Show the title field and the new/import/export buttons.
    ///
    /// Returns the action the user picked, if any.
    pub fn show_footer(ui: &mut egui::Ui, session: &mut Session) -> Option<Action> {
        ui.add_space(6.0);

        let mut title = session.document().title.clone();
        let response = egui::TextEdit::singleline(&mut title)
            .id_salt("title")
            .hint_text("Title")
            .font(egui::TextStyle::Heading)
            .desired_width(f32::INFINITY)
            .show(ui);
        if response.response.changed() {
            session.set_title(title);
        }

        ui.add_space(6.0);

        let mut action = None;
        ui.columns(3, |columns| {
            let buttons = [
                (Action::New, "New", "Start a blank document (Ctrl+N)"),
                (Action::Import, "Import...", "Open a text file (Ctrl+O)"),
                (Action::Export, "Export...", "Save as a text file (Ctrl+S)"),
            ];
            for (column, (kind, label, hint)) in columns.iter_mut().zip(buttons) {
                column.vertical_centered_justified(|ui| {
                    if ui.button(label).on_hover_text(hint).clicked() {
                        action = Some(kind);
                    }
                });
            }
        });

        if session.is_modified() {
            ui.add_space(4.0);
            ui.weak("Unsaved changes");
        }

        ui.add_space(6.0);
        action
    }
}
