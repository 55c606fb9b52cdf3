/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status advancement ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{MenuItem, MenuItemId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Stage of an order. Stages only move forward, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl OrderStatus {
    /// The following stage, or `None` for the terminal status.
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItem>,
    #[serde(serialize_with = "crate::model::menu::serialize_amount")]
    pub total: f64,
    pub status: OrderStatus,
}

/// Payload for creating a new order: the requested menu item IDs, duplicates meaning quantity.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Vec<MenuItemId>,
}

impl Order {
    /// Creates a pending order from already resolved items. The total is their price sum.
    pub fn new(id: OrderId, items: Vec<MenuItem>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self {
            id,
            items,
            total,
            status: OrderStatus::Pending,
        }
    }
}
