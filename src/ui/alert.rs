//! Modal dialog for a pending alert

use eframe::egui;

use crate::core::session::Session;

pub struct AlertWindow;

impl AlertWindow {
    /// Show the pending alert, if any. "Ok", Enter or Escape dismisses it.
    ///
    /// The modal blocks the panels below it until the alert is dismissed.
    pub fn show(ctx: &egui::Context, session: &mut Session) {
        let Some(alert) = session.alert() else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.vertical_centered(|ui| {
                ui.heading(&alert.title);
                ui.add_space(8.0);
                ui.label(&alert.message);
                ui.add_space(12.0);
                ui.button("Ok").clicked()
            })
            .inner
        });

        let confirmed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if response.inner || confirmed || response.should_close() {
            session.dismiss_alert();
        }
    }
}
