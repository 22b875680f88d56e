//! # Course Routes
//!
//! Catalog browsing and the admin catalog editor.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::requests::CourseInput;
use super::state::AppState;
use crate::domain::{Course, CourseId};

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/:id",
            get(get_course).patch(update_course).delete(delete_course),
        )
}

async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    Ok(Json(state.courses.list_courses().await?))
}

async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
) -> ApiResult<Json<Course>> {
    let Path(id) = id?;
    Ok(Json(state.courses.get_course(id).await?))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let Json(input) = payload?;
    let create = input.into_create().map_err(ApiError::invalid("Invalid course data"))?;
    let course = state.courses.create_course(create).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<Json<Course>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let patch = input.into_patch().map_err(ApiError::invalid("Invalid course data"))?;
    Ok(Json(state.courses.update_course(id, patch).await?))
}

async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id?;
    state.courses.deactivate_course(id).await?;
    Ok(Json(json!({ "message": "Course deleted successfully" })))
}
