//! # Student Routes
//!
//! Read-only admin views over registered students.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::error::ApiResult;
use super::state::AppState;
use crate::domain::{Order, Student, StudentId};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/:id", get(get_student))
        .route("/students/:id/orders", get(list_student_orders))
}

async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.students.list_students().await?))
}

async fn get_student(
    State(state): State<AppState>,
    id: Result<Path<StudentId>, PathRejection>,
) -> ApiResult<Json<Student>> {
    let Path(id) = id?;
    Ok(Json(state.students.get_student(id).await?))
}

async fn list_student_orders(
    State(state): State<AppState>,
    id: Result<Path<StudentId>, PathRejection>,
) -> ApiResult<Json<Vec<Order>>> {
    let Path(id) = id?;
    Ok(Json(state.orders.list_orders_for_student(id).await?))
}
