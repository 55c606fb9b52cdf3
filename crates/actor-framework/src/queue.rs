//! # Work Queue
//!
//! FIFO of entity IDs waiting for their next queued action. The queue lives inside the
//! `ResourceActor`, so enqueueing at creation and popping in `Next` are serialized with every
//! other request to the same actor.

use std::collections::VecDeque;

/// What happens to an ID after the action popped for it succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueuePolicy {
    /// The ID leaves the queue for good after one action.
    #[default]
    OneShot,
    /// The ID goes back to the tail while the entity still reports
    /// [`ActorEntity::is_queued`](crate::ActorEntity::is_queued).
    UntilSettled,
}

/// FIFO of pending IDs. No priorities and no deduplication.
#[derive(Debug)]
pub struct WorkQueue<Id> {
    pending: VecDeque<Id>,
    policy: QueuePolicy,
}

impl<Id> WorkQueue<Id> {
    pub fn new(policy: QueuePolicy) -> Self {
        Self {
            pending: VecDeque::new(),
            policy,
        }
    }

    pub fn policy(&self) -> QueuePolicy {
        self.policy
    }

    /// Appends `id` at the tail.
    pub fn enqueue(&mut self, id: Id) {
        self.pending.push_back(id);
    }

    /// Pops the head, or `None` when nothing is waiting.
    pub fn dequeue(&mut self) -> Option<Id> {
        self.pending.pop_front()
    }

    /// Applies the policy to an ID whose action just completed.
    /// Returns `true` if the ID was put back.
    pub fn settle(&mut self, id: Id, still_queued: bool) -> bool {
        match self.policy {
            QueuePolicy::UntilSettled if still_queued => {
                self.pending.push_back(id);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
