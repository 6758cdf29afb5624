//! # UI State Module
//!
//! General UI state that affects the overall user experience but is not part
//! of the menu session.
//!
//! ## Responsibilities:
//! - User feedback messages (error and success)
//! - The search box's edit buffer
//! - Events collected during a frame, applied once rendering finishes

use shared::MenuEvent;

/// Presentation-only state for one app instance
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,

    /// Text currently in the search box
    pub search_input: String,

    /// Events emitted by widgets this frame
    pub pending_events: Vec<MenuEvent>,

    /// Continue was pressed this frame
    pub continue_requested: bool,
}

impl UIState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Set an error message, replacing any success message
    pub fn set_error(&mut self, message: String) {
        self.success_message = None;
        self.error_message = Some(message);
    }

    /// Set a success message, replacing any error message
    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
    }

    /// Queue an event for the end of the frame
    pub fn emit(&mut self, event: MenuEvent) {
        self.pending_events.push(event);
    }

    /// Take this frame's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<MenuEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
