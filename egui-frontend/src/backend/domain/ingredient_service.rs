//! Ingredient resolution for the detail screen.
//!
//! Lookups are keyed by dish display name, so two dishes sharing a name share
//! an ingredient list. Unknown names get a fixed three-line placeholder.

use log::debug;
use shared::{Dish, Ingredient};
use std::sync::Arc;

use crate::backend::storage::IngredientTable;

/// Placeholder lines shown for dishes without an ingredient entry
pub fn placeholder_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("Ingredient 1", "01 Pc"),
        Ingredient::new("Ingredient 2", "12g"),
        Ingredient::new("Tomato", "01 Pc"),
    ]
}

/// Resolves a dish to its ingredient list
#[derive(Debug, Clone, Default)]
pub struct IngredientService {
    table: Arc<IngredientTable>,
}

impl IngredientService {
    pub fn new(table: IngredientTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn ingredients_for(&self, dish: &Dish) -> Vec<Ingredient> {
        match self.table.get(&dish.name) {
            Some(ingredients) => ingredients.clone(),
            None => {
                debug!("No ingredient entry for '{}', using placeholder", dish.name);
                placeholder_ingredients()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{CatalogProvider, StaticCatalog};

    fn service() -> IngredientService {
        IngredientService::new(StaticCatalog::new().load_ingredients().unwrap())
    }

    fn dish_named(name: &str) -> Dish {
        let mut dish = StaticCatalog::new().load_dishes().unwrap().remove(0);
        dish.name = name.to_string();
        dish
    }

    #[test]
    fn test_known_dish_ingredients() {
        let ingredients = service().ingredients_for(&dish_named("Tandoori Chicken"));

        assert_eq!(
            ingredients,
            vec![
                Ingredient::new("Chicken", "250g"),
                Ingredient::new("Yogurt", "2 tbsp"),
                Ingredient::new("Spices", "to taste"),
            ]
        );
    }

    #[test]
    fn test_unknown_dish_gets_placeholder() {
        let service = service();
        let dish = dish_named("Unknown Dish");

        assert!(!service.table.contains_key(&dish.name));
        assert_eq!(
            service.ingredients_for(&dish),
            vec![
                Ingredient::new("Ingredient 1", "01 Pc"),
                Ingredient::new("Ingredient 2", "12g"),
                Ingredient::new("Tomato", "01 Pc"),
            ]
        );
    }

    #[test]
    fn test_lookup_is_by_name_not_id() {
        let service = service();
        let mut dish = dish_named("Kesar Phirni");
        dish.id = 9999;

        assert_eq!(service.ingredients_for(&dish)[0], Ingredient::new("Milk", "500ml"));
    }

    #[test]
    fn test_empty_table_always_falls_back() {
        let service = IngredientService::default();
        assert_eq!(service.ingredients_for(&dish_named("Kadhai Paneer 1")).len(), 3);
    }
}
