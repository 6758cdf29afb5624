use anyhow::{anyhow, Result};
use log::info;
use shared::FinalizedSelection;
use std::cell::RefCell;
use std::rc::Rc;

use super::traits::SelectionSink;

/// Sink that only logs the finalized selection. Stands in for order submission.
#[derive(Debug, Clone, Default)]
pub struct LoggingSelectionSink;

impl SelectionSink for LoggingSelectionSink {
    fn submit(&self, selection: &FinalizedSelection) -> Result<()> {
        info!(
            "🧾 Finalized selection {} at {}: {} dishes",
            selection.id, selection.created_at, selection.total
        );
        for (meal_type, count) in selection.counts.iter() {
            info!("   {}: {}", meal_type.label(), count);
        }
        for dish in &selection.dishes {
            info!("   - [{}] {} ({})", dish.id, dish.name, dish.dietary_type);
        }
        Ok(())
    }
}

/// Sink that keeps submissions in memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionSink {
    submissions: Rc<RefCell<Vec<FinalizedSelection>>>,
    rejection: Option<String>,
}

impl InMemorySelectionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that refuses every submission with the given message
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            submissions: Rc::default(),
            rejection: Some(message.into()),
        }
    }

    pub fn submissions(&self) -> Vec<FinalizedSelection> {
        self.submissions.borrow().clone()
    }
}

impl SelectionSink for InMemorySelectionSink {
    fn submit(&self, selection: &FinalizedSelection) -> Result<()> {
        if let Some(message) = &self.rejection {
            return Err(anyhow!("{}", message));
        }
        self.submissions.borrow_mut().push(selection.clone());
        Ok(())
    }
}
