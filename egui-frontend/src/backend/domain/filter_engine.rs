//! Filter engine for the party menu.
//!
//! Pure functions over the in-memory catalog: narrowing the dish list to what
//! the menu screen shows, and aggregating the selection into per-meal-type
//! counts. Nothing here is cached; callers recompute on every read.
//!
//! ## Business Rules
//!
//! - A dish is shown only on its own meal-type tab
//! - Veg dishes pass when the veg flag is on, non-veg dishes when the non-veg
//!   flag is on; with both flags off nothing passes
//! - Search is a case-insensitive substring match on the display name, and an
//!   empty search matches everything
//! - Catalog order is preserved

use shared::{DietaryType, Dish, DishId, MealType, MealTypeCounts, MenuFilter};
use std::collections::{HashMap, HashSet};

/// Dishes that pass the tab, dietary and search filters, in catalog order
pub fn filter_dishes(
    catalog: &[Dish],
    tab: MealType,
    include_veg: bool,
    include_non_veg: bool,
    search_text: &str,
) -> Vec<Dish> {
    let needle = search_text.to_lowercase();
    catalog
        .iter()
        .filter(|dish| dish.meal_type == tab)
        .filter(|dish| passes_dietary(dish.dietary_type, include_veg, include_non_veg))
        .filter(|dish| dish.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// `filter_dishes` driven by a `MenuFilter` value
pub fn apply_filter(catalog: &[Dish], filter: &MenuFilter) -> Vec<Dish> {
    filter_dishes(
        catalog,
        filter.tab,
        filter.include_veg,
        filter.include_non_veg,
        &filter.search_text,
    )
}

fn passes_dietary(dietary_type: DietaryType, include_veg: bool, include_non_veg: bool) -> bool {
    match dietary_type {
        DietaryType::Veg => include_veg,
        DietaryType::NonVeg => include_non_veg,
    }
}

/// Selected dishes per meal type. Ids missing from the catalog are skipped.
pub fn count_by_meal_type(catalog: &[Dish], selected: &HashSet<DishId>) -> MealTypeCounts {
    let meal_types: HashMap<DishId, MealType> =
        catalog.iter().map(|dish| (dish.id, dish.meal_type)).collect();

    let mut counts = MealTypeCounts::default();
    for meal_type in selected.iter().filter_map(|id| meal_types.get(id)) {
        counts.increment(*meal_type);
    }
    counts
}
