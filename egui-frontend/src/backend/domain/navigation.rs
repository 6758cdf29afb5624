//! Two-screen navigation: the menu list and the ingredient detail screen.

use log::{debug, info};
use shared::{Dish, NavigationState};

/// Owns the current screen and applies screen transitions
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Show the ingredient screen for `dish`, from either screen
    pub fn open_ingredient(&mut self, dish: Dish) {
        info!("🍋 Opening ingredients for '{}' ({})", dish.name, dish.id);
        self.state = NavigationState::IngredientDetail(dish);
    }

    /// Return to the menu list, discarding the detail dish
    pub fn close_ingredient(&mut self) {
        match std::mem::take(&mut self.state) {
            NavigationState::IngredientDetail(dish) => {
                info!("⬅️ Closing ingredients for '{}'", dish.name);
            }
            NavigationState::MenuList => {
                debug!("Close requested while already on the menu list");
            }
        }
    }
}
