//! # Header Module
//!
//! Top section of the menu screen: search box, meal-type tabs with selected
//! counts, and the veg / non-veg filter toggles.
//!
//! ## Key Functions:
//! - `render_menu_header()` - draws all three rows
//!
//! Every widget here only emits `MenuEvent`s; the session is updated after the
//! frame by `process_pending_events()`.

use eframe::egui;
use shared::{MealType, MenuEvent};

use crate::ui::app_state::PartyMenuApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::mappers::{tab_count_suffix, SEARCH_PLACEHOLDER};

impl PartyMenuApp {
    /// Render the search bar, tabs and dietary filters
    pub fn render_menu_header(&mut self, ui: &mut egui::Ui) {
        self.render_search_bar(ui);
        ui.add_space(6.0);
        self.render_meal_type_tabs(ui);
        ui.add_space(4.0);
        self.render_dietary_filters(ui);
    }

    fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.ui_state.search_input)
                .hint_text(SEARCH_PLACEHOLDER)
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            let text = self.ui_state.search_input.clone();
            self.ui_state.emit(MenuEvent::SetSearch(text));
        }
    }

    fn render_meal_type_tabs(&mut self, ui: &mut egui::Ui) {
        let active_tab = self.session.filter().tab;
        let counts = self.session.counts();

        ui.columns(MealType::ALL.len(), |columns| {
            for (column, meal_type) in columns.iter_mut().zip(MealType::ALL) {
                let is_active = meal_type == active_tab;
                let text = format!("{}{}", meal_type.label(), tab_count_suffix(counts.get(meal_type)));

                let label = if is_active {
                    egui::RichText::new(text).color(CURRENT_THEME.accent.primary).strong()
                } else {
                    egui::RichText::new(text).color(CURRENT_THEME.typography.muted)
                };
                let fill = if is_active {
                    CURRENT_THEME.accent.soft_background
                } else {
                    egui::Color32::TRANSPARENT
                };

                let button = egui::Button::new(label)
                    .fill(fill)
                    .stroke(egui::Stroke::NONE)
                    .min_size(egui::vec2(column.available_width(), 32.0));
                let response = column.add(button);

                if is_active {
                    // Underline marks the active tab
                    let rect = response.rect;
                    column.painter().line_segment(
                        [rect.left_bottom(), rect.right_bottom()],
                        egui::Stroke::new(2.0, CURRENT_THEME.accent.primary),
                    );
                }

                if response.clicked() && !is_active {
                    self.ui_state.emit(MenuEvent::SelectTab(meal_type));
                }
            }
        });
    }

    fn render_dietary_filters(&mut self, ui: &mut egui::Ui) {
        let filter = self.session.filter().clone();

        ui.horizontal(|ui| {
            if filter_button(ui, "Veg", filter.include_veg, CURRENT_THEME.dietary.veg).clicked() {
                self.ui_state.emit(MenuEvent::ToggleVeg);
            }
            if filter_button(ui, "Non-Veg", filter.include_non_veg, CURRENT_THEME.dietary.non_veg).clicked() {
                self.ui_state.emit(MenuEvent::ToggleNonVeg);
            }
        });
    }
}

fn filter_button(ui: &mut egui::Ui, text: &str, active: bool, color: egui::Color32) -> egui::Response {
    let (text_color, fill, border) = if active {
        (color, CURRENT_THEME.accent.soft_background, CURRENT_THEME.accent.primary)
    } else {
        (
            CURRENT_THEME.typography.muted,
            CURRENT_THEME.layout.card_background,
            CURRENT_THEME.layout.filter_border,
        )
    };

    ui.add(
        egui::Button::new(egui::RichText::new(text).color(text_color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, border))
            .rounding(egui::Rounding::same(16.0)),
    )
}
