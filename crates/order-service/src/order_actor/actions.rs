//! Custom actions for the Order actor.
//!
//! Orders are never updated by callers. Their status only changes through [`OrderAction`],
//! applied by the advancer to the head of the actor's work queue.

use crate::model::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order one stage forward.
    Advance,
}

/// Results from OrderActions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActionResult {
    /// The status moved from `from` to `to`.
    Advanced { from: OrderStatus, to: OrderStatus },
    /// The order was already terminal; nothing changed.
    Unchanged(OrderStatus),
}

impl OrderActionResult {
    /// The status after the action.
    pub fn status(self) -> OrderStatus {
        match self {
            OrderActionResult::Advanced { to, .. } => to,
            OrderActionResult::Unchanged(status) => status,
        }
    }
}
