//! # Ingredient Screen Module
//!
//! Detail screen for one dish: back arrow, dish image, name, description and
//! the ingredient list with quantities. The ingredient lines come from the
//! backend's `IngredientService`, falling back to placeholders for dishes
//! without an entry.

use eframe::egui;
use shared::{Dish, MenuEvent};

use crate::ui::app_state::PartyMenuApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::CURRENT_THEME;

impl PartyMenuApp {
    /// Render the ingredient detail screen for `dish`
    pub fn render_ingredient_screen(&mut self, ui: &mut egui::Ui, dish: &Dish) {
        let ingredients = self.backend.ingredient_service.ingredients_for(dish);

        ui.horizontal(|ui| {
            let back = egui::Button::new(egui::RichText::new("←").size(22.0)).frame(false);
            if ui.add(back).clicked() {
                self.ui_state.emit(MenuEvent::CloseIngredient);
            }
            ui.label(
                egui::RichText::new("Ingredient list")
                    .size(20.0)
                    .strong()
                    .color(CURRENT_THEME.accent.primary),
            );
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Image::new(dish.image.as_str())
                                .fit_to_exact_size(egui::vec2(220.0, 160.0))
                                .rounding(egui::Rounding::same(12.0)),
                        );
                    });
                    ui.add_space(8.0);

                    ui.label(
                        egui::RichText::new(&dish.name)
                            .size(20.0)
                            .strong()
                            .color(CURRENT_THEME.typography.title),
                    );
                    ui.label(egui::RichText::new(&dish.description).color(CURRENT_THEME.typography.body));

                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new("Ingredients")
                            .size(17.0)
                            .strong()
                            .color(CURRENT_THEME.typography.title),
                    );
                    ui.separator();

                    for ingredient in &ingredients {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&ingredient.name).size(16.0));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(
                                    egui::RichText::new(&ingredient.quantity)
                                        .size(16.0)
                                        .color(CURRENT_THEME.typography.muted),
                                );
                            });
                        });
                    }
                });
            });
    }
}
