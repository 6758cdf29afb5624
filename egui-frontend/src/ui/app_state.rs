//! # App State Module
//!
//! Defines the central application struct for the party menu app and the
//! end-of-frame handling of user events.
//!
//! ## Key Types:
//! - `PartyMenuApp` - backend, menu session and UI-only state
//!
//! ## State Management:
//! Widgets never mutate the session while the frame is being drawn. They queue
//! `MenuEvent`s on `UIState`, and `process_pending_events()` applies them once
//! rendering finishes, so every frame draws one consistent snapshot.

use anyhow::Result;
use log::{error, info};
use shared::MenuEvent;

use crate::backend::domain::MenuSession;
use crate::backend::storage::MenuConfigRepository;
use crate::backend::Backend;
use crate::ui::state::UIState;

/// Main application struct for the egui party menu
pub struct PartyMenuApp {
    pub backend: Backend,
    pub session: MenuSession,
    pub ui_state: UIState,
}

impl PartyMenuApp {
    /// Create the app from the on-disk configuration
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        info!("🚀 Initializing PartyMenuApp");

        // Dish images are remote URIs
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = MenuConfigRepository::from_environment().load()?;
        let backend = Backend::new(config)?;
        Ok(Self::with_backend(backend))
    }

    /// Create the app around an existing backend
    pub fn with_backend(backend: Backend) -> Self {
        let mut session = backend.new_session();
        session.on_selection_change(|change| {
            info!(
                "🍽️ Dish {} {} ({} selected)",
                change.dish_id,
                if change.selected { "added" } else { "removed" },
                change.total
            );
        });

        let mut ui_state = UIState::new();
        ui_state.search_input = session.filter().search_text.clone();

        Self {
            backend,
            session,
            ui_state,
        }
    }

    /// Apply this frame's events, then handle a Continue press
    pub fn process_pending_events(&mut self) {
        for event in self.ui_state.drain_events() {
            if matches!(event, MenuEvent::ToggleSelect(_)) {
                self.ui_state.clear_messages();
            }
            self.session.apply(event);
        }

        if std::mem::take(&mut self.ui_state.continue_requested) {
            self.submit_selection();
        }
    }

    fn submit_selection(&mut self) {
        match self.backend.order_service.submit(&mut self.session) {
            Ok(finalized) => {
                let noun = if finalized.total == 1 { "dish" } else { "dishes" };
                self.ui_state
                    .set_success(format!("Sent {} {} for your party", finalized.total, noun));
            }
            Err(e) => {
                error!("Failed to submit selection: {}", e);
                self.ui_state.set_error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{InMemorySelectionSink, MenuConfig, StaticCatalog};
    use shared::MealType;

    fn app_with_sink(sink: InMemorySelectionSink) -> PartyMenuApp {
        let backend = Backend::with_provider(MenuConfig::default(), &StaticCatalog::new(), sink).unwrap();
        PartyMenuApp::with_backend(backend)
    }

    #[test]
    fn test_events_applied_after_frame() {
        let mut app = app_with_sink(InMemorySelectionSink::new());

        app.ui_state.emit(MenuEvent::SelectTab(MealType::Dessert));
        app.ui_state.emit(MenuEvent::ToggleSelect(201));
        assert_eq!(app.session.total_selected(), 0);

        app.process_pending_events();

        assert_eq!(app.session.filter().tab, MealType::Dessert);
        assert!(app.session.is_selected(201));
    }

    #[test]
    fn test_continue_with_nothing_selected_shows_error() {
        let sink = InMemorySelectionSink::new();
        let mut app = app_with_sink(sink.clone());

        app.ui_state.continue_requested = true;
        app.process_pending_events();

        assert_eq!(app.ui_state.error_message.as_deref(), Some("No dishes selected"));
        assert!(!app.ui_state.continue_requested);
        assert!(sink.submissions().is_empty());
    }

    #[test]
    fn test_continue_submits_selection() {
        let sink = InMemorySelectionSink::new();
        let mut app = app_with_sink(sink.clone());

        app.ui_state.emit(MenuEvent::ToggleSelect(1));
        app.ui_state.continue_requested = true;
        app.process_pending_events();

        assert_eq!(sink.submissions().len(), 1);
        assert_eq!(app.session.total_selected(), 0);
        assert_eq!(app.ui_state.success_message.as_deref(), Some("Sent 1 dish for your party"));
    }
}
