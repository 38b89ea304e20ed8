use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use frontier_contact::{
    ContactMessage, DEFAULT_LIST_LIMIT, MessageStatus, NewStatusCheck, StatusCheck,
    SubmissionPayload,
};
use serde::Deserialize;
use serde_json::{Value, json};
use strum::VariantNames;

use crate::{catalogue::SERVICES, error::ApiError, routes::AppState};

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Frontier Web Development API is running"}))
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "timestamp": frontier_shared::now()}))
}

pub async fn services() -> Json<Value> {
    Json(json!({ "services": SERVICES }))
}

pub async fn submit(
    State(app_state): State<AppState>,
    input: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = input.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let message = app_state
        .inbox
        .submit(payload)
        .await
        .map_err(|err| ApiError::from_domain("Failed to submit contact form", err))?;

    Ok((StatusCode::OK, Json(message)))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

pub async fn list(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = app_state
        .inbox
        .list(query.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await
        .map_err(|err| ApiError::from_domain("Failed to fetch contact messages", err))?;

    Ok(Json(messages))
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Value>, ApiError> {
    let status = MessageStatus::from_str(&query.status).map_err(|_| {
        ApiError::Unprocessable(format!(
            "Invalid status `{}`, expected one of: {}",
            query.status,
            MessageStatus::VARIANTS.join(", ")
        ))
    })?;

    app_state
        .inbox
        .update_status(&id, status)
        .await
        .map_err(|err| ApiError::from_domain("Failed to update message status", err))?;

    Ok(Json(json!({"message": "Status updated successfully"})))
}

pub async fn analytics(State(app_state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let now = frontier_shared::now();
    let stats = app_state
        .inbox
        .stats(now)
        .await
        .map_err(|err| ApiError::from_domain("Failed to fetch analytics", err))?;

    Ok(Json(json!({
        "total_messages": stats.total_messages,
        "new_messages": stats.new_messages,
        "recent_messages": stats.recent_messages,
        "timestamp": now,
    })))
}

pub async fn create_status_check(
    State(app_state): State<AppState>,
    input: Result<Json<NewStatusCheck>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(input) = input.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let check = app_state
        .inbox
        .record_status_check(input)
        .await
        .map_err(|err| ApiError::from_domain("Failed to record status check", err))?;

    Ok(Json(check))
}

pub async fn status_checks(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = app_state
        .inbox
        .status_checks()
        .await
        .map_err(|err| ApiError::from_domain("Failed to fetch status checks", err))?;

    Ok(Json(checks))
}
