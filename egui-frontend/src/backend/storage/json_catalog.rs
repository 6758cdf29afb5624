//! # JSON Catalog
//!
//! File-backed catalog provider. The file holds the dish list in catalog order
//! and an optional name-keyed ingredient table:
//!
//! ```json
//! {
//!   "dishes": [ { "id": 1, "name": "Kadhai Paneer 1", "mealType": "MAIN COURSE", "type": "VEG", ... } ],
//!   "ingredients": { "Kadhai Paneer 1": [ { "name": "Paneer", "qty": "200g" } ] }
//! }
//! ```

use log::{debug, info};
use serde::Deserialize;
use shared::Dish;
use std::fs;
use std::path::{Path, PathBuf};

use super::catalog_error::{validate_catalog, CatalogError};
use super::traits::{CatalogContents, CatalogProvider, IngredientTable};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    dishes: Vec<Dish>,
    #[serde(default)]
    ingredients: IngredientTable,
}

/// Catalog provider reading a JSON file on demand
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_catalog_file(&self) -> Result<CatalogFile, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::CatalogUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let catalog: CatalogFile = serde_json::from_str(&content).map_err(|source| CatalogError::MalformedCatalog {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Parsed catalog file {:?}: {} dishes, {} ingredient entries",
            self.path,
            catalog.dishes.len(),
            catalog.ingredients.len()
        );
        Ok(catalog)
    }
}

impl CatalogProvider for JsonCatalog {
    fn load_dishes(&self) -> Result<Vec<Dish>, CatalogError> {
        Ok(self.load()?.dishes)
    }

    fn load_ingredients(&self) -> Result<IngredientTable, CatalogError> {
        Ok(self.read_catalog_file()?.ingredients)
    }

    fn load(&self) -> Result<CatalogContents, CatalogError> {
        let CatalogFile { dishes, ingredients } = self.read_catalog_file()?;
        validate_catalog(&dishes)?;
        info!("Loaded {} dishes from {:?}", dishes.len(), self.path);
        Ok(CatalogContents { dishes, ingredients })
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Ingredient, MealType};
    use tempfile::TempDir;

    const TWO_DISH_CATALOG: &str = r#"{
        "dishes": [
            {
                "id": 1, "name": "Kadhai Paneer 1", "categoryId": 1, "mealType": "MAIN COURSE", "type": "VEG",
                "description": "Paneer cubes in spicy onion gravy.", "image": "https://example.com/paneer.png",
                "category": { "id": 1, "name": "North Indian", "image": "https://example.com/paneer.png" },
                "dishType": "CURRY"
            },
            {
                "id": 101, "name": "Tandoori Chicken", "categoryId": 2, "mealType": "STARTER", "type": "NON-VEG",
                "description": "Grilled chicken.", "image": "https://example.com/chicken.png",
                "category": { "id": 2, "name": "Indian Starter", "image": "https://example.com/chicken.png" },
                "dishType": "GRILL"
            }
        ],
        "ingredients": {
            "Tandoori Chicken": [ { "name": "Chicken", "qty": "250g" } ]
        }
    }"#;

    fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("catalog.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_dishes_and_ingredients() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = JsonCatalog::new(write_catalog(&temp_dir, TWO_DISH_CATALOG));

        let dishes = catalog.load_dishes().unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].id, 1);
        assert_eq!(dishes[1].meal_type, MealType::Starter);

        let ingredients = catalog.load_ingredients().unwrap();
        assert_eq!(ingredients["Tandoori Chicken"], vec![Ingredient::new("Chicken", "250g")]);
    }

    #[test]
    fn test_load_takes_both_halves_from_one_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_catalog(&temp_dir, TWO_DISH_CATALOG);
        let catalog = JsonCatalog::new(&path);

        let contents = catalog.load().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(contents.dishes.len(), 2);
        assert_eq!(contents.ingredients.len(), 1);
        assert!(contents.ingredients.contains_key(&contents.dishes[1].name));
        assert!(matches!(catalog.load(), Err(CatalogError::CatalogUnavailable { .. })));
    }

    #[test]
    fn test_load_validates_dishes() {
        let temp_dir = TempDir::new().unwrap();
        let content = TWO_DISH_CATALOG.replace("\"Tandoori Chicken\", \"categoryId\"", "\" \", \"categoryId\"");
        let catalog = JsonCatalog::new(write_catalog(&temp_dir, &content));

        assert!(matches!(catalog.load(), Err(CatalogError::EmptyDishName(101))));
    }

    #[test]
    fn test_ingredients_section_is_optional() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = JsonCatalog::new(write_catalog(&temp_dir, r#"{ "dishes": [] }"#));

        assert!(catalog.load_dishes().unwrap().is_empty());
        assert!(catalog.load_ingredients().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = JsonCatalog::new(temp_dir.path().join("missing.json"));

        let result = catalog.load_dishes();
        assert!(matches!(result, Err(CatalogError::CatalogUnavailable { .. })));
    }

    #[test]
    fn test_unknown_meal_type_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let content = TWO_DISH_CATALOG.replace("\"STARTER\"", "\"BRUNCH\"");
        let catalog = JsonCatalog::new(write_catalog(&temp_dir, &content));

        let result = catalog.load_dishes();
        assert!(matches!(result, Err(CatalogError::MalformedCatalog { .. })));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let content = TWO_DISH_CATALOG.replace("\"id\": 101", "\"id\": 1");
        let catalog = JsonCatalog::new(write_catalog(&temp_dir, &content));

        let result = catalog.load_dishes();
        assert!(matches!(result, Err(CatalogError::DuplicateDishId(1))));
    }
}
