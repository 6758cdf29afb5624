//! # UI State Module
//!
//! State that belongs to the presentation layer only. Menu state (filters,
//! selection, current screen) lives in the backend's `MenuSession`.

pub mod ui_state;

pub use ui_state::*;
