//! Periodic task that moves the order at the head of the work queue one stage forward.

use crate::clients::OrderClient;
use crate::model::OrderId;
use crate::order_actor::OrderActionResult;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

pub struct Advancer {
    client: OrderClient,
    period: Duration,
}

impl Advancer {
    pub fn new(client: OrderClient, period: Duration) -> Self {
        Self { client, period }
    }

    /// Ticks every `period` until `shutdown` fires or its sender is dropped.
    /// The first tick happens one full period after start.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = self.period.as_secs(), "Advancer started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = shutdown.recv() => {
                    info!("Advancer received shutdown signal");
                    break;
                }
            }
        }
    }

    /// Runs a single advancement. Failures are logged and swallowed.
    pub async fn tick(&self) -> Option<(OrderId, OrderActionResult)> {
        match self.client.advance_next().await {
            Ok(Some((id, result))) => {
                match result {
                    OrderActionResult::Advanced { to, .. } => {
                        info!(order_id = %id, "Order {} is now {}.", id.0, to)
                    }
                    OrderActionResult::Unchanged(status) => {
                        debug!(order_id = %id, %status, "Order already settled")
                    }
                }
                Some((id, result))
            }
            Ok(None) => {
                debug!("No orders waiting");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to advance next order");
                None
            }
        }
    }
}
