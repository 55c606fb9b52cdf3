//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages
/// for every operation, requests are standardized around the lifecycle of a stored resource:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize, store and (optionally) queue a resource.
/// - **Get**: Fetches the current state of the resource by ID.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on a resource chosen by ID.
/// - **Next**: Executes a custom action on the resource at the head of the work queue.
///
/// The enum is generic over `T: ActorEntity`, so a payload for one resource cannot be sent to
/// another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Answers with the entity as stored.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Pops the head of the work queue and applies `action` to it.
    /// Answers `None` when the queue is empty.
    Next {
        action: T::Action,
        respond_to: Response<Option<(T::Id, T::ActionResult)>>,
    },
}
