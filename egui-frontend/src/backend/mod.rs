//! # Backend Module
//!
//! All non-UI logic of the party menu application. The backend loads the
//! catalog once at startup and exposes the domain services the egui frontend
//! drives synchronously:
//! - Uses synchronous operations only
//! - Receives its catalog through a `CatalogProvider`
//! - Hands finalized selections to a `SelectionSink`

use anyhow::{Context, Result};
use log::info;
use shared::Dish;
use std::sync::Arc;

pub mod domain;
pub mod storage;

use domain::{IngredientService, MenuSession, OrderService};
use storage::{CatalogContents, CatalogProvider, JsonCatalog, LoggingSelectionSink, MenuConfig, SelectionSink, StaticCatalog};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub catalog: Arc<Vec<Dish>>,
    pub ingredient_service: IngredientService,
    pub order_service: OrderService,
    pub config: MenuConfig,
}

impl Backend {
    /// Create a backend from configuration, picking the catalog source it names
    pub fn new(config: MenuConfig) -> Result<Self> {
        let provider: Box<dyn CatalogProvider> = match &config.catalog_path {
            Some(path) => Box::new(JsonCatalog::new(path)),
            None => Box::new(StaticCatalog::new()),
        };
        Self::with_provider(config, provider.as_ref(), LoggingSelectionSink)
    }

    /// Create a backend from an explicit catalog provider and selection sink
    pub fn with_provider(
        config: MenuConfig,
        provider: &dyn CatalogProvider,
        sink: impl SelectionSink + 'static,
    ) -> Result<Self> {
        info!("Loading catalog from {}", provider.describe());
        let CatalogContents { dishes, ingredients } = provider
            .load()
            .with_context(|| format!("Failed to load catalog from {}", provider.describe()))?;

        info!("Catalog ready: {} dishes, {} ingredient entries", dishes.len(), ingredients.len());

        Ok(Backend {
            catalog: Arc::new(dishes),
            ingredient_service: IngredientService::new(ingredients),
            order_service: OrderService::new(sink),
            config,
        })
    }

    /// Fresh session over this backend's catalog, using the configured filter
    pub fn new_session(&self) -> MenuSession {
        MenuSession::new(self.catalog.clone(), self.config.initial_filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MealType, MenuEvent};
    use std::cell::Cell;
    use storage::{CatalogError, IngredientTable, InMemorySelectionSink};
    use tempfile::TempDir;

    /// Counts how the backend asks for catalog data
    #[derive(Default)]
    struct CountingCatalog {
        separate_loads: Cell<usize>,
        combined_loads: Cell<usize>,
    }

    impl CatalogProvider for CountingCatalog {
        fn load_dishes(&self) -> Result<Vec<Dish>, CatalogError> {
            self.separate_loads.set(self.separate_loads.get() + 1);
            StaticCatalog::new().load_dishes()
        }

        fn load_ingredients(&self) -> Result<IngredientTable, CatalogError> {
            self.separate_loads.set(self.separate_loads.get() + 1);
            StaticCatalog::new().load_ingredients()
        }

        fn load(&self) -> Result<CatalogContents, CatalogError> {
            self.combined_loads.set(self.combined_loads.get() + 1);
            let catalog = StaticCatalog::new();
            Ok(CatalogContents {
                dishes: catalog.load_dishes()?,
                ingredients: catalog.load_ingredients()?,
            })
        }

        fn describe(&self) -> String {
            "counting catalog".to_string()
        }
    }

    #[test]
    fn test_startup_loads_catalog_once() {
        let provider = CountingCatalog::default();

        let backend = Backend::with_provider(MenuConfig::default(), &provider, InMemorySelectionSink::new()).unwrap();

        assert_eq!(provider.combined_loads.get(), 1);
        assert_eq!(provider.separate_loads.get(), 0);
        assert_eq!(backend.catalog.len(), 33);
    }

    #[test]
    fn test_json_catalog_backend() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{ "dishes": [ { "id": 7, "name": "Dal Makhani", "categoryId": 1, "mealType": "MAIN COURSE", "type": "VEG",
                 "description": "Slow cooked lentils.", "image": "https://example.com/dal.png",
                 "category": { "id": 1, "name": "North Indian", "image": "https://example.com/dal.png" },
                 "dishType": "CURRY" } ],
                 "ingredients": { "Dal Makhani": [ { "name": "Urad Dal", "qty": "100g" } ] } }"#,
        )
        .unwrap();
        let config = MenuConfig {
            catalog_path: Some(path),
            ..MenuConfig::default()
        };

        let backend = Backend::new(config).unwrap();

        assert_eq!(backend.catalog.len(), 1);
        assert_eq!(backend.ingredient_service.ingredients_for(&backend.catalog[0])[0].name, "Urad Dal");
    }

    #[test]
    fn test_default_backend_uses_static_catalog() {
        let backend = Backend::new(MenuConfig::default()).unwrap();

        assert_eq!(backend.catalog.len(), 33);
        assert_eq!(backend.new_session().filter().tab, MealType::MainCourse);
    }

    #[test]
    fn test_missing_catalog_file_fails_startup() {
        let temp_dir = TempDir::new().unwrap();
        let config = MenuConfig {
            catalog_path: Some(temp_dir.path().join("nope.json")),
            ..MenuConfig::default()
        };

        let result = Backend::new(config);

        assert!(result.is_err());
    }

    #[test]
    fn test_end_to_end_selection_flow() {
        let sink = InMemorySelectionSink::new();
        let config = MenuConfig {
            default_tab: MealType::Starter,
            ..MenuConfig::default()
        };
        let backend = Backend::with_provider(config, &StaticCatalog::new(), sink.clone()).unwrap();
        let mut session = backend.new_session();

        assert_eq!(session.filtered_dishes()[0].id, 101);
        session.apply(MenuEvent::ToggleSelect(101));
        session.apply(MenuEvent::SelectTab(MealType::Dessert));
        session.apply(MenuEvent::ToggleSelect(201));

        let finalized = backend.order_service.submit(&mut session).unwrap();

        assert_eq!(finalized.total, 2);
        assert_eq!(sink.submissions().len(), 1);
        assert_eq!(session.total_selected(), 0);
    }
}
