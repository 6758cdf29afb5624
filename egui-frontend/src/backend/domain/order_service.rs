//! Order service for the party menu.
//!
//! Turns the current selection into a `FinalizedSelection` when the user
//! presses Continue and hands it to the configured `SelectionSink`. The
//! selection is cleared only after the sink accepts it.

use chrono::Utc;
use log::{info, warn};
use shared::{Dish, FinalizedSelection};
use uuid::Uuid;

use super::menu_session::MenuSession;
use super::selection_store::SelectionStore;
use crate::backend::storage::SelectionSink;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("No dishes selected")]
    EmptySelection,
    #[error("Selection was not accepted: {0}")]
    SinkRejected(String),
}

/// Service that finalizes and submits selections
pub struct OrderService {
    sink: Box<dyn SelectionSink>,
}

impl OrderService {
    pub fn new(sink: impl SelectionSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Snapshot the selection. Dishes keep catalog order; unknown ids are reported separately.
    pub fn finalize(&self, catalog: &[Dish], selection: &SelectionStore) -> Result<FinalizedSelection, OrderError> {
        if selection.count() == 0 {
            return Err(OrderError::EmptySelection);
        }

        let dishes: Vec<Dish> = catalog
            .iter()
            .filter(|dish| selection.is_selected(dish.id))
            .cloned()
            .collect();

        let mut unresolved_ids: Vec<_> = selection
            .selected_ids()
            .iter()
            .copied()
            .filter(|id| !catalog.iter().any(|dish| dish.id == *id))
            .collect();
        unresolved_ids.sort_unstable();

        Ok(FinalizedSelection {
            id: Uuid::new_v4(),
            created_at: Utc::now().to_rfc3339(),
            counts: selection.count_by_meal_type(catalog),
            total: selection.count(),
            dishes,
            unresolved_ids,
        })
    }

    /// Finalize the session's selection, submit it, and clear it on success
    pub fn submit(&self, session: &mut MenuSession) -> Result<FinalizedSelection, OrderError> {
        let finalized = self.finalize(session.catalog(), session.selection())?;

        if !finalized.unresolved_ids.is_empty() {
            warn!("Submitting selection with unknown dish ids: {:?}", finalized.unresolved_ids);
        }

        self.sink
            .submit(&finalized)
            .map_err(|e| OrderError::SinkRejected(format!("{:#}", e)))?;

        session.selection_mut().clear();
        info!("✅ Submitted selection {} with {} dishes", finalized.id, finalized.total);
        Ok(finalized)
    }
}
