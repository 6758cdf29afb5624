//! # Screen Router Module
//!
//! Chooses which screen to draw from the session's navigation state.
//!
//! ## Screen Flow:
//! - `NavigationState::MenuList` -> header, dish list and footer
//! - `NavigationState::IngredientDetail(dish)` -> ingredient screen for that dish

use eframe::egui;
use shared::NavigationState;

use crate::ui::app_state::PartyMenuApp;

impl PartyMenuApp {
    /// Render the active screen into the given context
    pub fn render_active_screen(&mut self, ctx: &egui::Context) {
        match self.session.navigation().clone() {
            NavigationState::MenuList => {
                egui::TopBottomPanel::top("menu_header")
                    .frame(egui::Frame::none().inner_margin(egui::Margin::same(12.0)))
                    .show(ctx, |ui| self.render_menu_header(ui));

                egui::TopBottomPanel::bottom("menu_footer")
                    .frame(egui::Frame::none().inner_margin(egui::Margin::same(12.0)))
                    .show(ctx, |ui| self.render_footer(ui));

                egui::CentralPanel::default().show(ctx, |ui| self.render_dish_list(ui));
            }
            NavigationState::IngredientDetail(dish) => {
                egui::CentralPanel::default().show(ctx, |ui| self.render_ingredient_screen(ui, &dish));
            }
        }
    }
}
