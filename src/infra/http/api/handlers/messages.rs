//! Message handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::repo_to_api;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::{CreateMessageRequest, MessageResponse};
use crate::infra::http::api::state::ApiState;

pub async fn list_messages(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let messages = state.messages.list_messages().await.map_err(repo_to_api)?;

    let body: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();
    Ok(Json(body))
}

pub async fn get_message_by_id(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let message = state.messages.get_message(id).await.map_err(repo_to_api)?;

    match message {
        Some(message) => Ok(Json(MessageResponse::from(message))),
        None => Err(ApiError::not_found()),
    }
}

pub async fn create_message(
    State(state): State<ApiState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // An unparseable body is reported through the same validation shape as a
    // failed field check.
    let Json(request) = payload
        .map_err(|rejection| ApiError::validation(format!("body: {}", rejection.body_text())))?;

    let content = request
        .validate()
        .map_err(|err| ApiError::validation(err.to_string()))?;

    let created = state
        .messages
        .create_message(content.to_string())
        .await
        .map_err(repo_to_api)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(created))))
}
