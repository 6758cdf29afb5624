//! # UI Components Module
//!
//! This module organizes all UI components for the party menu application.
//!
//! ## Module Organization:
//! - `screen_router` - picks the menu or ingredient screen from navigation state
//! - `header` - search bar, meal-type tabs and dietary filters
//! - `dish_list` - section title and dish cards
//! - `footer` - running total, Continue button and messages
//! - `ingredient_screen` - dish detail with ingredient lines
//! - `styling` - global style setup and drawing helpers
//! - `theme` - color constants

pub mod dish_list;
pub mod footer;
pub mod header;
pub mod ingredient_screen;
pub mod screen_router;
pub mod styling;
pub mod theme;

pub use styling::{card_frame, draw_dietary_marker, setup_menu_style};
pub use theme::*;
