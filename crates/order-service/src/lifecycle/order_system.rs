use crate::clients::OrderClient;
use crate::lifecycle::Advancer;
use crate::model::Catalog;
use actor_framework::QueuePolicy;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime settings for [`OrderSystem`].
#[derive(Debug, Clone, Copy)]
pub struct SystemSettings {
    pub advance_interval: Duration,
    pub queue_policy: QueuePolicy,
}

impl From<&crate::config::Config> for SystemSettings {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            advance_interval: config.advance_interval(),
            queue_policy: config.queue_policy(),
        }
    }
}

/// The running order service: the order actor plus the advancer that drives it.
///
/// # Architecture
///
/// - **Order Actor**: owns the order store and the work queue, with the [`Catalog`] as context
/// - **Advancer**: ticks on a fixed period and advances the order at the head of the queue
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(settings);
/// let order = system.order_client.place_order(vec![MenuItemId(1)]).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub catalog: Arc<Catalog>,
    shutdown_tx: broadcast::Sender<()>,
    advancer_handle: JoinHandle<()>,
    actor_handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the order actor and the advancer. Must be called inside a Tokio runtime.
    pub fn new(settings: SystemSettings) -> Self {
        let catalog = Arc::new(Catalog::standard());

        let (order_actor, generic_client) = crate::order_actor::new(settings.queue_policy);
        let order_client = OrderClient::new(generic_client);
        let actor_handle = tokio::spawn(order_actor.run(catalog.clone()));

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let advancer = Advancer::new(order_client.clone(), settings.advance_interval);
        let advancer_handle = tokio::spawn(advancer.run(shutdown_rx));

        info!(
            policy = ?settings.queue_policy,
            interval_secs = settings.advance_interval.as_secs(),
            "Order system started"
        );

        Self {
            order_client,
            catalog,
            shutdown_tx,
            advancer_handle,
            actor_handle,
        }
    }

    /// Stops the advancer, then lets the order actor drain once every client is gone.
    ///
    /// Clones of `order_client` held elsewhere (e.g. by the HTTP state) must be dropped first,
    /// otherwise the actor keeps running and this never returns.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.advancer_handle.await {
            error!("Advancer task failed: {:?}", e);
            return Err(format!("Advancer task failed: {:?}", e));
        }

        drop(self.order_client);
        if let Err(e) = self.actor_handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
