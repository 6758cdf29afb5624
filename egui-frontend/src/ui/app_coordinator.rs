//! # App Coordinator Module
//!
//! The main eframe update loop.
//!
//! ## Application Flow:
//! 1. Apply the menu style
//! 2. Handle global input (ESC closes the ingredient screen)
//! 3. Render the active screen, collecting `MenuEvent`s
//! 4. Apply collected events to the session and handle Continue

use eframe::egui;
use shared::MenuEvent;

use crate::ui::app_state::PartyMenuApp;
use crate::ui::components::setup_menu_style;

impl eframe::App for PartyMenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_menu_style(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && !self.session.navigation().is_menu_list() {
            self.ui_state.emit(MenuEvent::CloseIngredient);
        }

        self.render_active_screen(ctx);

        let had_events = !self.ui_state.pending_events.is_empty() || self.ui_state.continue_requested;
        self.process_pending_events();

        if had_events {
            // Draw the updated state right away instead of waiting for the next input
            ctx.request_repaint();
        }
    }
}
