use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use service::order::{NewOrder, Order};
use tracing::info;

use crate::errors::ApiError;
use crate::metrics;
use crate::state::AppState;

/// List every stored order
#[utoipa::path(get, path = "/orders", tag = "orders", responses(
    (status = 200, description = "All orders, storage order", body = [crate::openapi::OrderDoc]),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorResponse)
))]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.orders.list().await?;
    info!(count = orders.len(), "list orders");
    Ok(Json(orders))
}

/// Create an order. The body is decoded by hand so that a missing key is
/// reported with the fixed message instead of a deserializer error.
#[utoipa::path(post, path = "/orders", tag = "orders", request_body = crate::openapi::OrderDoc, responses(
    (status = 201, description = "Created", body = crate::openapi::OrderDoc),
    (status = 400, description = "Missing or mistyped 'id'/'amount'", body = crate::openapi::ErrorResponse),
    (status = 409, description = "Duplicate id", body = crate::openapi::ErrorResponse),
    (status = 500, description = "Storage failure", body = crate::openapi::ErrorResponse)
))]
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let input = NewOrder::decode_slice(&body)?;
    let created = state.orders.create(input).await?;
    metrics::ORDERS_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(created)))
}
