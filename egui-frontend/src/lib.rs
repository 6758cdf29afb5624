//! Party menu dish selection: a UI-agnostic backend plus an egui frontend.

pub mod backend;
pub mod ui;
