//! # System Lifecycle
//!
//! Starting, wiring and stopping the running service.
//!
//! [`OrderSystem::new`] creates the order actor, injects the shared [`Catalog`](crate::model::Catalog)
//! through `run(context)`, and spawns the [`Advancer`] with a clone of the order client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Signal the advancer** - a `broadcast` message ends its `select!` loop
//! 2. **Drop the last client** - the actor's `receiver.recv()` returns `None`
//! 3. **Await both tasks** - a panicked task is reported as an error
//!
//! Requests already queued on the actor channel are still answered before it exits.

pub mod advancer;
pub mod order_system;

pub use advancer::*;
pub use order_system::*;
