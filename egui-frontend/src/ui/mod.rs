//! # UI Module
//!
//! The egui presentation layer. It renders the backend's `MenuSession` and
//! feeds user actions back as `MenuEvent`s; it holds no menu logic itself.

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod mappers;
pub mod state;

pub use app_state::PartyMenuApp;
