use crate::api::{ApiError, AppState};
use crate::model::{MenuItem, MenuItemId, Order, OrderId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Body of `POST /order`. `items` may be absent or `null`; both count as no items.
///
/// Elements are kept as raw JSON so that a value which can never be a menu item ID
/// (`-1`, `1.5`, `"1"`) is rejected as an invalid item, not as a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

impl PlaceOrderRequest {
    /// An empty or whitespace-only body is treated like `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Rejecting request body");
            ApiError::MalformedBody
        })
    }

    /// The requested IDs in request order. Absent `items` yields an empty list.
    pub fn item_ids(self) -> Result<Vec<MenuItemId>, ApiError> {
        let values = self.items.unwrap_or_default();
        let mut ids = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();
        for value in values {
            match as_item_id(&value) {
                Some(id) => ids.push(id),
                None => rejected.push(value),
            }
        }
        if rejected.is_empty() {
            Ok(ids)
        } else {
            Err(ApiError::UnparsableItemIds(rejected))
        }
    }
}

/// A JSON number naming a whole value in `u32` range. `2.0` counts as `2`.
fn as_item_id(value: &Value) -> Option<MenuItemId> {
    let id = match value.as_u64() {
        Some(n) => u32::try_from(n).ok()?,
        None => {
            let f = value.as_f64()?;
            if f.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&f) {
                return None;
            }
            f as u32
        }
    };
    Some(MenuItemId(id))
}

/// GET /menu
pub async fn get_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.catalog.list().to_vec())
}

/// POST /order
#[instrument(skip_all)]
pub async fn place_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let items = PlaceOrderRequest::from_body(&body)?.item_ids()?;
    let order = state.orders.place_order(items).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /order/{id}
#[instrument(skip_all)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let id = id
        .parse::<u32>()
        .map(OrderId)
        .map_err(|_| ApiError::UnparsableOrderId(id))?;
    Ok(Json(state.orders.order(id).await?))
}
