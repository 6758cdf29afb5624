//! # Dish List Module
//!
//! The scrolling list of dish cards under the section title. Each card shows
//! the dish name with its veg / non-veg marker, the description, an
//! "Ingredient" link, the dish image and the add / remove button.

use eframe::egui;
use shared::{Dish, MenuEvent};

use crate::ui::app_state::PartyMenuApp;
use crate::ui::components::styling::{card_frame, draw_dietary_marker};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::mappers::{add_remove_label, section_title, EMPTY_LIST_TEXT};

const DISH_IMAGE_SIZE: f32 = 88.0;

impl PartyMenuApp {
    /// Render the section title and the filtered dish list
    pub fn render_dish_list(&mut self, ui: &mut egui::Ui) {
        let tab = self.session.filter().tab;
        ui.label(
            egui::RichText::new(section_title(tab, self.session.tab_count(tab)))
                .size(17.0)
                .strong()
                .color(CURRENT_THEME.typography.title),
        );
        ui.add_space(4.0);

        let dishes = self.session.filtered_dishes();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if dishes.is_empty() {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(EMPTY_LIST_TEXT).color(CURRENT_THEME.typography.muted));
                    });
                    return;
                }

                for dish in &dishes {
                    self.render_dish_card(ui, dish);
                    ui.add_space(6.0);
                }
            });
    }

    fn render_dish_card(&mut self, ui: &mut egui::Ui, dish: &Dish) {
        let selected = self.session.is_selected(dish.id);

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(ui.available_width() - DISH_IMAGE_SIZE - 16.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&dish.name)
                                .size(16.0)
                                .strong()
                                .color(CURRENT_THEME.typography.title),
                        );
                        draw_dietary_marker(ui, dish.is_veg());
                    });

                    ui.label(egui::RichText::new(&dish.description).color(CURRENT_THEME.typography.body));

                    let link = ui.add(
                        egui::Label::new(
                            egui::RichText::new("🍋 Ingredient")
                                .color(CURRENT_THEME.accent.primary)
                                .underline(),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if link.clicked() {
                        self.ui_state.emit(MenuEvent::OpenIngredient(dish.clone()));
                    }
                });

                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Image::new(dish.image.as_str())
                            .fit_to_exact_size(egui::vec2(DISH_IMAGE_SIZE, DISH_IMAGE_SIZE))
                            .rounding(egui::Rounding::same(8.0)),
                    );
                    if add_remove_button(ui, selected).clicked() {
                        self.ui_state.emit(MenuEvent::ToggleSelect(dish.id));
                    }
                });
            });
        });
    }
}

fn add_remove_button(ui: &mut egui::Ui, selected: bool) -> egui::Response {
    let (text_color, fill) = if selected {
        (CURRENT_THEME.dietary.non_veg, CURRENT_THEME.dietary.non_veg_background)
    } else {
        (CURRENT_THEME.dietary.veg, CURRENT_THEME.dietary.veg_background)
    };

    ui.add(
        egui::Button::new(egui::RichText::new(add_remove_label(selected)).color(text_color).strong())
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, text_color))
            .min_size(egui::vec2(DISH_IMAGE_SIZE, 28.0)),
    )
}
