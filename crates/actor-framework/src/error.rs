//! # Framework Errors
//!
//! Common error types shared by every actor and client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` for framework failures and for entity errors of another type, so
    /// callers can fall back to their generic mapping.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(err) => match err.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(err) => Err(FrameworkError::EntityError(err)),
            },
            other => Err(other),
        }
    }
}
