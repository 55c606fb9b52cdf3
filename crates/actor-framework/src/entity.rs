//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by the
//! generic `ResourceActor`. It specifies associated types for IDs, creation payloads, actions,
//! context and errors, and provides the lifecycle hooks (`on_create`, `handle_action`) plus the
//! work-queue membership check (`is_queued`).
//!
//! # Associated Types
//! A `Ticket` entity requires a `TicketCreate` payload, and you can't accidentally send it a
//! payload meant for another resource. The compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//! - [`ActorEntity::is_queued`] defaults to `false`, so entities stay out of the work queue
//!   unless they opt in.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await. It also defines a `Context` type, which is
/// injected into every hook. Dependencies are handed to `run()` instead of `new()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32: the actor assigns IDs densely starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Close`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every hook of the actor. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`; the context is available for lookups
    /// the payload needs to be turned into state.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// An error here aborts the creation and no ID is consumed.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether the entity belongs in the actor's work queue.
    ///
    /// Checked when the entity is stored and, under
    /// [`QueuePolicy::UntilSettled`](crate::QueuePolicy::UntilSettled), after every
    /// queued action.
    fn is_queued(&self) -> bool {
        false
    }
}
