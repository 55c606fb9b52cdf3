//! Command-line and environment configuration.

use actor_framework::QueuePolicy;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "order-service")]
#[command(about = "In-memory order service with a fixed menu", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "ORDER_SERVICE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "ORDER_SERVICE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Seconds between two advancer ticks.
    #[arg(
        long,
        env = "ORDER_SERVICE_ADVANCE_INTERVAL_SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub advance_interval_secs: u64,

    /// Put orders back on the queue after each advance until they complete.
    #[arg(long, env = "ORDER_SERVICE_REQUEUE", default_value_t = false)]
    pub requeue: bool,

    #[arg(long, env = "ORDER_SERVICE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn advance_interval(&self) -> Duration {
        Duration::from_secs(self.advance_interval_secs)
    }

    pub fn queue_policy(&self) -> QueuePolicy {
        if self.requeue {
            QueuePolicy::UntilSettled
        } else {
            QueuePolicy::OneShot
        }
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            advance_interval_secs: 300,
            requeue: false,
            log_level: "info".to_string(),
        }
    }
}
