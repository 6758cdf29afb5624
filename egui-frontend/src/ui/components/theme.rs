//! # Theme Configuration
//!
//! Centralized color configuration for the party menu screens. All visual
//! styling should use these constants so the screens stay consistent.
//!
//! ## Usage
//! ```rust
//! use party_menu_egui::ui::components::theme::CURRENT_THEME;
//!
//! let color = CURRENT_THEME.accent.primary;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand accent (active tab, continue button, links)
    pub accent: AccentColors,
    /// Background and card colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Veg / non-veg markers and buttons
    pub dietary: DietaryColors,
}

#[derive(Debug, Clone)]
pub struct AccentColors {
    pub primary: Color32,
    /// Light fill behind active tabs and selected filters
    pub soft_background: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub screen_background: Color32,
    pub search_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub filter_border: Color32,
    pub footer_border: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub title: Color32,
    pub body: Color32,
    pub muted: Color32,
    pub label: Color32,
    pub on_accent: Color32,
}

#[derive(Debug, Clone)]
pub struct DietaryColors {
    pub veg: Color32,
    pub veg_background: Color32,
    pub non_veg: Color32,
    pub non_veg_background: Color32,
}

/// The active theme: white cards with an orange accent
pub const CURRENT_THEME: Theme = Theme {
    accent: AccentColors {
        primary: Color32::from_rgb(255, 77, 0),
        soft_background: Color32::from_rgb(255, 242, 230),
    },
    layout: LayoutColors {
        screen_background: Color32::from_rgb(252, 252, 252),
        search_background: Color32::from_rgb(241, 241, 241),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(238, 238, 238),
        filter_border: Color32::from_rgb(221, 221, 221),
        footer_border: Color32::from_rgb(238, 238, 238),
    },
    typography: TypographyColors {
        title: Color32::from_rgb(26, 26, 26),
        body: Color32::from_rgb(102, 102, 102),
        muted: Color32::from_rgb(136, 136, 136),
        label: Color32::from_rgb(68, 68, 68),
        on_accent: Color32::WHITE,
    },
    dietary: DietaryColors {
        veg: Color32::from_rgb(8, 140, 8),
        veg_background: Color32::from_rgb(230, 248, 230),
        non_veg: Color32::from_rgb(208, 2, 27),
        non_veg_background: Color32::from_rgb(255, 230, 230),
    },
};

impl Theme {
    /// Marker color for a dish's dietary type
    pub fn dietary_color(&self, is_veg: bool) -> Color32 {
        if is_veg {
            self.dietary.veg
        } else {
            self.dietary.non_veg
        }
    }
}
