//! # Footer Module
//!
//! Bottom bar of the menu screen with the running total and the Continue
//! button, plus the error / success message line above it. A thin top border
//! separates it from the dish list.

use eframe::egui;

use crate::ui::app_state::PartyMenuApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::mappers::footer_text;

impl PartyMenuApp {
    /// Render the footer bar
    pub fn render_footer(&mut self, ui: &mut egui::Ui) {
        let panel = ui.max_rect();
        ui.painter().hline(
            panel.x_range(),
            panel.top(),
            egui::Stroke::new(1.0, CURRENT_THEME.layout.footer_border),
        );

        self.render_messages(ui);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(footer_text(self.session.total_selected()))
                    .size(16.0)
                    .strong()
                    .color(CURRENT_THEME.typography.label),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Continue")
                        .color(CURRENT_THEME.typography.on_accent)
                        .strong(),
                )
                .fill(CURRENT_THEME.accent.primary)
                .min_size(egui::vec2(120.0, 36.0));

                if ui.add(button).clicked() {
                    self.ui_state.continue_requested = true;
                }
            });
        });
    }

    /// Error and success message display
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui_state.error_message {
            ui.colored_label(CURRENT_THEME.dietary.non_veg, format!("❌ {}", error));
        }
        if let Some(success) = &self.ui_state.success_message {
            ui.colored_label(CURRENT_THEME.dietary.veg, format!("✅ {}", success));
        }
    }
}
