//! HTTP surface of the order service.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /menu` | [`handlers::get_menu`] |
//! | `POST /order` | [`handlers::place_order`] |
//! | `GET /order/{id}` | [`handlers::get_order`] |

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::OrderClient;
use crate::model::Catalog;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(handlers::get_menu))
        .route("/order", post(handlers::place_order))
        .route("/order/{id}", get(handlers::get_order))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves until `shutdown` resolves, then finishes in-flight requests.
/// The router, and with it every `OrderClient` clone in the state, is dropped on return.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
