//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and turns framework results back into [`OrderError`].
use crate::model::{MenuItemId, Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Item validation happens in the actor while the order is built, so a rejected order never
/// reaches the store or the work queue.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order for the given menu item IDs and returns it as stored.
    #[instrument(skip(self))]
    pub async fn place_order(&self, items: Vec<MenuItemId>) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self
            .inner
            .create(OrderCreate { items })
            .await
            .map_err(<Self as ActorClient<Order>>::map_error)?;
        info!(order_id = %order.id, total = order.total, "Order {} placed successfully!", order.id.0);
        Ok(order)
    }

    /// Fetches the full current record of an order.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Advances the order at the head of the work queue by one stage.
    /// `Ok(None)` when no order is waiting.
    #[instrument(skip(self))]
    pub async fn advance_next(&self) -> Result<Option<(OrderId, OrderActionResult)>, OrderError> {
        debug!("Sending request");
        self.inner
            .next(OrderAction::Advance)
            .await
            .map_err(<Self as ActorClient<Order>>::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}
