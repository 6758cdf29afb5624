//! # Styling Module
//!
//! Global egui style setup and small drawing helpers shared by the menu and
//! ingredient screens.

use eframe::egui;

use super::theme::CURRENT_THEME;

/// Configure global egui styling for the menu screens
pub fn setup_menu_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.screen_background;
        style.visuals.window_fill = CURRENT_THEME.layout.screen_background;
        // Text edits draw on extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = CURRENT_THEME.layout.search_background;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// White rounded card with a light border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
}

/// Small filled circle marking veg (green) or non-veg (red)
pub fn draw_dietary_marker(ui: &mut egui::Ui, is_veg: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 5.0, CURRENT_THEME.dietary_color(is_veg));
}
