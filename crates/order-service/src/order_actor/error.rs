//! Error types for the Order actor.

use crate::model::{MenuItemId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The display strings of the first three variants are the messages returned to API callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order request named no items at all.
    #[error("No items in the order.")]
    NoItems,

    /// At least one requested item ID is not on the menu.
    #[error("Some items are invalid.")]
    InvalidItems { unknown: Vec<MenuItemId> },

    /// No order has the requested ID.
    #[error("Order not found.")]
    NotFound(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
