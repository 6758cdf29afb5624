//! # Storage Module
//!
//! Where the menu's data comes from and where a finalized selection goes.
//!
//! - `traits` - `CatalogProvider` and `SelectionSink` seams
//! - `static_catalog` - compiled-in sample catalog
//! - `json_catalog` - catalog read from a JSON file
//! - `config_repository` - YAML menu configuration
//! - `selection_sinks` - local `SelectionSink` implementations

pub mod catalog_error;
pub mod config_repository;
pub mod json_catalog;
pub mod selection_sinks;
pub mod static_catalog;
pub mod traits;

pub use catalog_error::{validate_catalog, CatalogError};
pub use config_repository::{MenuConfig, MenuConfigRepository};
pub use json_catalog::JsonCatalog;
pub use selection_sinks::{InMemorySelectionSink, LoggingSelectionSink};
pub use static_catalog::StaticCatalog;
pub use traits::{CatalogContents, CatalogProvider, IngredientTable, SelectionSink};
