//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource type gets
//! one [`ResourceActor`] that owns every instance of it, plus a cloneable [`ResourceClient`]
//! that talks to the actor over a channel.
//!
//! ## Resource-Oriented Actors
//!
//! - A small, uniform request set (Create, Get, Action, Next) works for any entity that
//!   implements [`ActorEntity`].
//! - The actor processes one message at a time. Its store, its ID counter and its work queue
//!   are owned by a single task, so no request ever observes one of them updated without the
//!   others.
//! - IDs are dense: the counter only moves when an entity is actually stored.
//!
//! ## Work Queue
//!
//! Entities that report [`ActorEntity::is_queued`] when they are created join a FIFO inside
//! the actor. [`ResourceClient::next`] pops the head and applies an action to it in the same
//! step. The [`QueuePolicy`] decides whether an entity that still wants processing goes back
//! to the tail ([`QueuePolicy::UntilSettled`]) or leaves after one action
//! ([`QueuePolicy::OneShot`]).
//!
//! ## Dependency Injection via Context
//!
//! Dependencies are injected at runtime via `run(context)`, not at construction time:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct PriceList { base: f64 }
//!
//! #[derive(Clone, Debug)] struct Quote { id: u32, amount: f64 }
//! #[derive(Debug)] struct QuoteCreate { units: u32 }
//! #[derive(Debug)] enum QuoteAction {}
//! #[derive(Debug, thiserror::Error)] #[error("quote error")] struct QuoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Quote {
//!     type Id = u32; type Create = QuoteCreate; type Action = QuoteAction;
//!     type ActionResult = (); type Context = Arc<PriceList>; type Error = QuoteError;
//!
//!     fn from_create_params(id: u32, params: QuoteCreate, _: &Arc<PriceList>) -> Result<Self, Self::Error> {
//!         Ok(Self { id, amount: params.units as f64 })
//!     }
//!     async fn on_create(&mut self, ctx: &Arc<PriceList>) -> Result<(), Self::Error> {
//!         self.amount *= ctx.base;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, _: QuoteAction, _: &Arc<PriceList>) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Quote>::new(10);
//!     tokio::spawn(actor.run(Arc::new(PriceList { base: 2.5 })));
//!
//!     let quote = client.create(QuoteCreate { units: 4 }).await.unwrap();
//!     assert_eq!(quote.amount, 10.0);
//!     assert!(client.get(quote.id).await.unwrap().is_some());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from scripted expectations, for fast unit tests
//! of client wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod queue;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use queue::{QueuePolicy, WorkQueue};
