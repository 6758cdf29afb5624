//! # Domain Module
//!
//! Contains the business logic of the party menu screen, independent of any
//! UI framework or catalog source.
//!
//! ## Module Organization
//!
//! - **filter_engine**: pure filtering of the catalog and per-meal-type aggregation
//! - **selection_store**: selected dish ids with change notification
//! - **navigation**: menu list / ingredient detail transitions
//! - **ingredient_service**: name-keyed ingredient lookup with placeholder fallback
//! - **menu_session**: owner of all user-mutable state, applies `MenuEvent`s
//! - **order_service**: finalizes and submits the selection on Continue
//!
//! ## Business Rules
//!
//! - A dish appears only on its own meal-type tab
//! - Turning off both dietary filters hides every dish
//! - Selected ids unknown to the catalog are ignored by counts
//! - Unknown dish names get placeholder ingredients, never an error

pub mod filter_engine;
pub mod ingredient_service;
pub mod menu_session;
pub mod navigation;
pub mod order_service;
pub mod selection_store;

pub use filter_engine::*;
pub use ingredient_service::*;
pub use menu_session::*;
pub use navigation::*;
pub use order_service::*;
pub use selection_store::*;
