//! ActorEntity trait implementation for the Order domain type.
//!
//! Requested item IDs are resolved against the [`Catalog`] injected as the actor's context.
//! A rejected order is never stored, so it neither consumes an ID nor enters the work queue.

use crate::model::{Catalog, Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<Catalog>;
    type Error = OrderError;

    /// Builds a pending order from the requested IDs.
    ///
    /// # Errors
    /// - `NoItems` when nothing was requested.
    /// - `InvalidItems` when any ID is missing from the catalog.
    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        catalog: &Arc<Catalog>,
    ) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        let items = catalog
            .resolve(&params.items)
            .map_err(|unknown| OrderError::InvalidItems { unknown })?;
        Ok(Order::new(id, items))
    }

    /// Handles custom actions for the Order entity.
    ///
    /// `Advance` on a completed order is a no-op and reports `Unchanged`.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Arc<Catalog>,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Advance => match self.status.next() {
                Some(next) => {
                    let from = std::mem::replace(&mut self.status, next);
                    Ok(OrderActionResult::Advanced { from, to: next })
                }
                None => Ok(OrderActionResult::Unchanged(self.status)),
            },
        }
    }

    /// Orders wait in the work queue until they reach the terminal status.
    fn is_queued(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderStatus};

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::standard())
    }

    fn create(ids: &[u32]) -> OrderCreate {
        OrderCreate {
            items: ids.iter().copied().map(MenuItemId).collect(),
        }
    }

    #[test]
    fn empty_request_is_rejected() {
        let err = Order::from_create_params(OrderId(1), create(&[]), &catalog()).unwrap_err();
        assert_eq!(err, OrderError::NoItems);
    }

    #[test]
    fn unknown_item_is_rejected_with_its_id() {
        let err = Order::from_create_params(OrderId(1), create(&[1, 99]), &catalog()).unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidItems {
                unknown: vec![MenuItemId(99)]
            }
        );
        assert_eq!(err.to_string(), "Some items are invalid.");
    }

    #[test]
    fn duplicates_count_as_quantity() {
        let order = Order::from_create_params(OrderId(3), create(&[2, 2, 5]), &catalog()).unwrap();
        assert_eq!(order.items.len(), 3);
        assert_eq!(order.total, 12.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.is_queued());
    }

    #[tokio::test]
    async fn advance_walks_forward_and_stops_at_completed() {
        let ctx = catalog();
        let mut order = Order::from_create_params(OrderId(1), create(&[1]), &ctx).unwrap();

        let first = order.handle_action(OrderAction::Advance, &ctx).await.unwrap();
        assert_eq!(
            first,
            OrderActionResult::Advanced {
                from: OrderStatus::Pending,
                to: OrderStatus::InProgress
            }
        );

        let second = order.handle_action(OrderAction::Advance, &ctx).await.unwrap();
        assert_eq!(second.status(), OrderStatus::Completed);
        assert!(!order.is_queued());

        let third = order.handle_action(OrderAction::Advance, &ctx).await.unwrap();
        assert_eq!(third, OrderActionResult::Unchanged(OrderStatus::Completed));
        assert_eq!(order.status, OrderStatus::Completed);
    }
}
