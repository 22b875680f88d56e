//! # Order Routes
//!
//! Checkout submission plus the admin order list and status updates.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::requests::{PurchaseInput, StatusInput};
use super::state::AppState;
use crate::domain::{Order, OrderId};
use crate::notification::enrollment_message;

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/purchase", post(purchase))
        .route("/orders", get(list_orders))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/status", patch(update_order_status))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub message: &'static str,
    pub order_id: OrderId,
    /// Click-to-chat link carrying the enrollment notice for the verifier.
    pub whatsapp_url: String,
}

async fn purchase(
    State(state): State<AppState>,
    payload: Result<Json<PurchaseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PurchaseReceipt>)> {
    let Json(input) = payload?;
    let purchase = input.into_purchase().map_err(ApiError::invalid("Invalid purchase data"))?;

    let enrollment = state.orders.purchase(purchase).await?;
    let notice = enrollment_message(&enrollment);
    info!(
        order_id = enrollment.order.id,
        student_id = enrollment.student.id,
        %notice,
        "Enrollment notice prepared"
    );

    let receipt = PurchaseReceipt {
        message: "Purchase submitted successfully",
        order_id: enrollment.order.id,
        whatsapp_url: state.whatsapp.url(&notice),
    };
    Ok((StatusCode::CREATED, Json(receipt)))
}

async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list_orders().await?))
}

async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
) -> ApiResult<Json<Order>> {
    let Path(id) = id?;
    Ok(Json(state.orders.get_order(id).await?))
}

async fn update_order_status(
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
    payload: Result<Json<StatusInput>, JsonRejection>,
) -> ApiResult<Json<Order>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let status = input.into_status().map_err(ApiError::invalid("Invalid order status"))?;
    Ok(Json(state.orders.update_status(id, status).await?))
}
