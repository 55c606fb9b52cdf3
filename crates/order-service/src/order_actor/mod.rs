//! # Order Actor
//!
//! Owns every order ever placed plus the FIFO of orders waiting for their next status change.
//! Both live inside one [`ResourceActor`], so placing an order (store insert + enqueue) and an
//! advancer tick (dequeue + status change) can never interleave.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] with the messages API callers see
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for status advancement
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::QueuePolicy;
//! use order_service::clients::OrderClient;
//! use order_service::model::{Catalog, MenuItemId, OrderStatus};
//! use order_service::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(QueuePolicy::OneShot);
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(Arc::new(Catalog::standard())));
//!
//!     let order = client.place_order(vec![MenuItemId(1), MenuItemId(2)]).await?;
//!     assert_eq!(order.total, 15.0);
//!
//!     let (id, result) = client.advance_next().await?.expect("one order is queued");
//!     assert_eq!(id, order.id);
//!     assert_eq!(result.status(), OrderStatus::InProgress);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{QueuePolicy, ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(policy: QueuePolicy) -> (ResourceActor<Order>, ResourceClient<Order>) {
    let (actor, client) = ResourceActor::new(32);
    (actor.with_queue_policy(policy), client)
}
