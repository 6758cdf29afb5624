//! Selection store for the party menu.
//!
//! Holds the set of dish ids the user has chosen. Every mutation notifies the
//! registered listeners synchronously, in registration order, so derived
//! totals never lag behind the set.

use log::debug;
use shared::{Dish, DishId, MealTypeCounts, SelectionChange};
use std::collections::HashSet;
use std::fmt;

use super::filter_engine::count_by_meal_type;

type SelectionListener = Box<dyn FnMut(&SelectionChange)>;

/// Set of selected dish ids with change notification
#[derive(Default)]
pub struct SelectionStore {
    selected: HashSet<DishId>,
    listeners: Vec<SelectionListener>,
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Remove `dish_id` if selected, otherwise add it
    pub fn toggle(&mut self, dish_id: DishId) -> SelectionChange {
        let selected = if self.selected.remove(&dish_id) {
            false
        } else {
            self.selected.insert(dish_id);
            true
        };

        let change = SelectionChange {
            dish_id,
            selected,
            total: self.selected.len(),
        };
        debug!("Selection toggled: {:?}", change);
        self.notify(&change);
        change
    }

    pub fn is_selected(&self, dish_id: DishId) -> bool {
        self.selected.contains(&dish_id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> &HashSet<DishId> {
        &self.selected
    }

    /// Per-meal-type counts, skipping ids the catalog does not know
    pub fn count_by_meal_type(&self, catalog: &[Dish]) -> MealTypeCounts {
        count_by_meal_type(catalog, &self.selected)
    }

    /// Deselect everything, notifying once per removed dish
    pub fn clear(&mut self) {
        let mut removed: Vec<DishId> = self.selected.drain().collect();
        removed.sort_unstable();
        let mut remaining = removed.len();
        for dish_id in removed {
            remaining -= 1;
            let change = SelectionChange {
                dish_id,
                selected: false,
                total: remaining,
            };
            self.notify(&change);
        }
    }

    fn notify(&mut self, change: &SelectionChange) {
        for listener in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{CatalogProvider, StaticCatalog};
    use shared::MealType;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = SelectionStore::new();

        let change = store.toggle(5);
        assert!(change.selected);
        assert_eq!(change.total, 1);
        assert!(store.is_selected(5));

        let change = store.toggle(5);
        assert!(!change.selected);
        assert_eq!(change.total, 0);
        assert!(!store.is_selected(5));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut store = SelectionStore::new();
        store.toggle(1);

        for id in [1, 2] {
            let before = store.is_selected(id);
            store.toggle(id);
            store.toggle(id);
            assert_eq!(store.is_selected(id), before);
        }
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_counts_after_selecting_main_and_starter() {
        let catalog = StaticCatalog::new().load_dishes().unwrap();
        let mut store = SelectionStore::new();

        store.toggle(1);
        store.toggle(101);

        let counts = store.count_by_meal_type(&catalog);
        assert_eq!(counts.get(MealType::Starter), 1);
        assert_eq!(counts.get(MealType::MainCourse), 1);
        assert_eq!(counts.get(MealType::Dessert), 0);
        assert_eq!(counts.get(MealType::Sides), 0);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_count_sum_excludes_unknown_ids() {
        let catalog = StaticCatalog::new().load_dishes().unwrap();
        let mut store = SelectionStore::new();
        for id in [1, 201, 301, 4242] {
            store.toggle(id);
        }

        let counts = store.count_by_meal_type(&catalog);
        assert_eq!(counts.total(), store.count() - 1);
    }

    #[test]
    fn test_listeners_notified_synchronously() {
        let seen: Rc<RefCell<Vec<SelectionChange>>> = Rc::default();
        let mut store = SelectionStore::new();
        let sink = seen.clone();
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        store.toggle(3);
        assert_eq!(seen.borrow().len(), 1);
        store.toggle(4);
        store.toggle(3);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], SelectionChange { dish_id: 3, selected: false, total: 1 });
    }

    #[test]
    fn test_clear_notifies_each_removal() {
        let seen: Rc<RefCell<Vec<SelectionChange>>> = Rc::default();
        let mut store = SelectionStore::new();
        store.toggle(2);
        store.toggle(1);
        let sink = seen.clone();
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        store.clear();

        assert_eq!(store.count(), 0);
        assert_eq!(
            *seen.borrow(),
            vec![
                SelectionChange { dish_id: 1, selected: false, total: 1 },
                SelectionChange { dish_id: 2, selected: false, total: 0 },
            ]
        );
    }
}
