use shared::{Dish, DishId};
use std::path::PathBuf;

/// Failures at the catalog provider boundary
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file {path:?} could not be read")]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog file {path:?} is malformed")]
    MalformedCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Dish id {0} appears more than once in the catalog")]
    DuplicateDishId(DishId),
    #[error("Dish id {0} has an empty name")]
    EmptyDishName(DishId),
}

/// Check catalog invariants: unique ids and non-empty names
pub fn validate_catalog(dishes: &[Dish]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::with_capacity(dishes.len());
    for dish in dishes {
        if !seen.insert(dish.id) {
            return Err(CatalogError::DuplicateDishId(dish.id));
        }
        if dish.name.trim().is_empty() {
            return Err(CatalogError::EmptyDishName(dish.id));
        }
    }
    Ok(())
}
