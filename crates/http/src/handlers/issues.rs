use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use unionboard_core::ValidationError;

use crate::api_error::ApiError;
use crate::auth::AdminUser;
use crate::payload;
use crate::response_types::{CreatedResponse, IssueResponse, MutationResponse};
use crate::AppState;

pub async fn list_issues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IssueResponse>>, ApiError> {
    let issues = state.issue_service.list_issues().await?;
    Ok(Json(issues.into_iter().map(IssueResponse::from).collect()))
}

pub async fn create_issue(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let input = payload::create_input(&json_body(body)?)?;
    tracing::debug!(user = %admin.username, title = %input.title, "create issue request");
    let id = state.issue_service.create_issue(input).await?;
    Ok(Json(CreatedResponse { status: "ok", id }))
}

pub async fn update_issue(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let input = payload::update_input(&json_body(body)?)?;
    tracing::debug!(user = %admin.username, %id, "update issue request");
    state.issue_service.update_issue(&id, input).await?;
    Ok(Json(MutationResponse { result: "updated" }))
}

pub async fn delete_issue(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    tracing::debug!(user = %admin.username, %id, "delete issue request");
    state.issue_service.delete_issue(&id).await?;
    Ok(Json(MutationResponse { result: "deleted" }))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ValidationError> {
    body.map(|Json(value)| value).map_err(|rejection| ValidationError::body(rejection.body_text()))
}
