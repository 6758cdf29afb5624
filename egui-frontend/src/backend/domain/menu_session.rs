//! Menu session state for the party menu.
//!
//! The session is the single owner of everything the user can change: the
//! filter inputs, the selection set and the current screen. The presentation
//! layer reads derived values from it and sends back `MenuEvent`s; it never
//! mutates session state directly.
//!
//! ## Key Responsibilities
//!
//! - **Event handling**: applying tab, filter, search, selection and
//!   navigation events
//! - **Derived reads**: filtered dish list, per-meal-type counts and totals,
//!   always recomputed from current state
//! - **Filter state**: replaced by a new `MenuFilter` value on every change

use log::{debug, info};
use shared::{
    Dish, DishId, MealType, MealTypeCounts, MenuEvent, MenuFilter, NavigationState, SelectionChange,
};
use std::sync::Arc;

use super::filter_engine::apply_filter;
use super::navigation::Navigator;
use super::selection_store::SelectionStore;

/// All user-mutable state of the menu screen
#[derive(Debug)]
pub struct MenuSession {
    catalog: Arc<Vec<Dish>>,
    filter: MenuFilter,
    selection: SelectionStore,
    navigator: Navigator,
}

impl MenuSession {
    pub fn new(catalog: Arc<Vec<Dish>>, initial_filter: MenuFilter) -> Self {
        info!(
            "Starting menu session with {} dishes on tab {}",
            catalog.len(),
            initial_filter.tab
        );
        Self {
            catalog,
            filter: initial_filter,
            selection: SelectionStore::new(),
            navigator: Navigator::new(),
        }
    }

    /// Apply one user event
    pub fn apply(&mut self, event: MenuEvent) {
        debug!("Applying menu event: {:?}", event);
        match event {
            MenuEvent::SelectTab(tab) => self.filter = self.filter.with_tab(tab),
            MenuEvent::ToggleVeg => self.filter = self.filter.with_veg_toggled(),
            MenuEvent::ToggleNonVeg => self.filter = self.filter.with_non_veg_toggled(),
            MenuEvent::SetSearch(text) => self.filter = self.filter.with_search(text),
            MenuEvent::ToggleSelect(dish_id) => {
                self.selection.toggle(dish_id);
            }
            MenuEvent::OpenIngredient(dish) => self.navigator.open_ingredient(dish),
            MenuEvent::CloseIngredient => self.navigator.close_ingredient(),
        }
    }

    pub fn catalog(&self) -> &[Dish] {
        &self.catalog
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigator.state()
    }

    /// Dishes visible under the current filter, in catalog order
    pub fn filtered_dishes(&self) -> Vec<Dish> {
        apply_filter(&self.catalog, &self.filter)
    }

    pub fn counts(&self) -> MealTypeCounts {
        self.selection.count_by_meal_type(&self.catalog)
    }

    /// Selected count on one tab
    pub fn tab_count(&self, meal_type: MealType) -> usize {
        self.counts().get(meal_type)
    }

    pub fn total_selected(&self) -> usize {
        self.selection.count()
    }

    pub fn is_selected(&self, dish_id: DishId) -> bool {
        self.selection.is_selected(dish_id)
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    /// Register a selection change listener
    pub fn on_selection_change(&mut self, listener: impl FnMut(&SelectionChange) + 'static) {
        self.selection.subscribe(listener);
    }
}
