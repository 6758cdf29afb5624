//! # Storage Traits
//!
//! This module defines the collaborator seams between the menu domain and
//! wherever dishes come from and finalized selections go to. A static
//! in-memory catalog and a JSON file catalog implement `CatalogProvider`;
//! a remote catalog would slot in the same way.

use anyhow::Result;
use shared::{Dish, FinalizedSelection, Ingredient};
use std::collections::HashMap;

use super::catalog_error::CatalogError;

/// Ingredient lists keyed by dish display name
pub type IngredientTable = HashMap<String, Vec<Ingredient>>;

/// Dishes and ingredient table taken from the same read of a catalog source
#[derive(Debug, Clone, Default)]
pub struct CatalogContents {
    pub dishes: Vec<Dish>,
    pub ingredients: IngredientTable,
}

/// Supplies the dish catalog and ingredient breakdowns at startup
pub trait CatalogProvider {
    /// Load the ordered dish catalog. An empty catalog is valid.
    fn load_dishes(&self) -> Result<Vec<Dish>, CatalogError>;

    /// Load the name-keyed ingredient table
    fn load_ingredients(&self) -> Result<IngredientTable, CatalogError>;

    /// Load dishes and ingredients together. Providers backed by a file
    /// override this so both halves come from a single read.
    fn load(&self) -> Result<CatalogContents, CatalogError> {
        Ok(CatalogContents {
            dishes: self.load_dishes()?,
            ingredients: self.load_ingredients()?,
        })
    }

    /// Short description used in log output
    fn describe(&self) -> String;
}

/// Accepts a finalized selection when the user presses Continue
pub trait SelectionSink {
    fn submit(&self, selection: &FinalizedSelection) -> Result<()>;
}
