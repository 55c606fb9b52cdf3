//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one entity
//! type. It processes messages sequentially, so the entity store, the ID counter and the work
//! queue change together or not at all.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::queue::{QueuePolicy, WorkQueue};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor owns the in-memory `store`, the `next_id` counter, the work `queue` and the
/// receiver end of the channel. Each actor runs in its own Tokio task and handles one message at
/// a time, which gives exclusive access to all three without any locking.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, QueuePolicy, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, done: bool }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] enum TicketAction { Close }
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, _: TicketCreate, _: &()) -> Result<Self, Self::Error> {
///         Ok(Self { id, done: false })
///     }
///     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> {
///         self.done = true;
///         Ok(())
///     }
///     fn is_queued(&self) -> bool { !self.done }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.with_queue_policy(QueuePolicy::OneShot).run(()));
///
///     let ticket = client.create(TicketCreate).await.unwrap();
///     let (closed, _) = client.next(TicketAction::Close).await.unwrap().unwrap();
///     assert_eq!(closed, ticket.id);
///     assert!(client.next(TicketAction::Close).await.unwrap().is_none());
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity with the next ID, runs `on_create`, stores it, enqueues it if
///   `is_queued()`, and only then advances the counter. A rejected creation leaves no gap.
///   Answers with a snapshot of the stored entity.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **Action**: runs `handle_action` on the entity with the given ID.
/// * **Next**: pops the queue head, runs `handle_action` on it and applies the [`QueuePolicy`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    queue: WorkQueue<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full, calls to the
    /// client wait until there is space. The work queue starts with [`QueuePolicy::OneShot`].
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            queue: WorkQueue::new(QueuePolicy::default()),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replaces the work queue policy. Must be called before `run`.
    pub fn with_queue_policy(mut self, policy: QueuePolicy) -> Self {
        self.queue = WorkQueue::new(policy);
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. Entities can reach
    /// dependencies that were created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: T::Context) {
        // "Ticket" instead of "my_crate::model::Ticket"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, policy = ?self.queue.policy(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params, &context) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    if item.is_queued() {
                        self.queue.enqueue(id.clone());
                    }
                    self.store.insert(id.clone(), item.clone());
                    self.next_id += 1;
                    info!(entity_type, %id, size = self.store.len(), pending = self.queue.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Next { action, respond_to } => {
                    let Some(id) = self.queue.dequeue() else {
                        debug!(entity_type, "Queue empty");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    debug!(entity_type, %id, ?action, "Next");

                    // Entities are never removed, so this only fires on a broken invariant.
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Queued id has no entity, skipping");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    match item.handle_action(action, &context).await {
                        Ok(result) => {
                            let requeued = self.queue.settle(id.clone(), item.is_queued());
                            info!(entity_type, %id, requeued, pending = self.queue.len(), "Next ok");
                            let _ = respond_to.send(Ok(Some((id, result))));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Next failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), pending = self.queue.len(), "Shutdown");
    }
}
