use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::parse_user_id;
use crate::dto::LogResponse;
use crate::error::{AppError, AppResult};
use crate::services::log_query::{self, LogQueryParams};
use crate::AppState;

pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> AppResult<Json<LogResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let record = state
        .store
        .find_user(user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let result = log_query::query(&record.exercises, &params)?;

    Ok(Json(LogResponse {
        username: record.username,
        count: result.count,
        id: record.id,
        log: result.log,
    }))
}
