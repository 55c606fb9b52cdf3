//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger shared by every actor and client.
//!
//! The format is compact and hides the crate/module prefix (`with_target(false)`); actors tag
//! their lines with `entity_type` instead. `RUST_LOG` wins over the level handed in by the
//! caller:
//!
//! ```bash
//! RUST_LOG=info cargo run                      # lifecycle only
//! RUST_LOG=debug cargo run                     # full payloads
//! RUST_LOG=actor_framework=debug cargo run     # framework internals only
//! ```
//!
//! With `info`, the actor's own lines for a queued `Ticket` entity read as follows.
//! Spans opened by `#[instrument]`ed client methods prefix them (`open_ticket: Created ...`).
//!
//! ```text
//! INFO Actor started entity_type="Ticket" policy=OneShot
//! INFO Created entity_type="Ticket" id=1 size=1 pending=1
//! INFO Next ok entity_type="Ticket" id=1 requeued=false pending=0
//! INFO Shutdown entity_type="Ticket" size=1 pending=0
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. `default_level` applies when `RUST_LOG` is unset or
/// invalid.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
