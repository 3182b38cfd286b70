use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::Utc;
use validator::Validate;

use super::parse_user_id;
use crate::dto::{CreateExerciseRequest, ExerciseResponse};
use crate::error::{AppError, AppResult};
use crate::models::exercise::NewExercise;
use crate::services::calendar_date::{self, CalendarDate};
use crate::AppState;

pub async fn create_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(body): Form<CreateExerciseRequest>,
) -> AppResult<Json<ExerciseResponse>> {
    let user_id = parse_user_id(&user_id)?;

    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let description = body.description.trim();
    if description.is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }

    let duration = body.duration.trim().parse::<i64>().map_err(|_| {
        AppError::Validation(format!(
            "Duration must be a whole number of minutes, got '{}'",
            body.duration
        ))
    })?;

    let date = match body.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        None => Utc::now().date_naive(),
        Some(raw) => CalendarDate::parse(raw).date().ok_or_else(|| {
            AppError::Validation(format!("Date must be formatted as yyyy-mm-dd, got '{}'", raw))
        })?,
    };

    let exercise = NewExercise {
        description: description.to_string(),
        duration,
        date: calendar_date::to_display(date),
    };

    let (user, entry) = state
        .store
        .add_exercise(user_id, exercise)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    tracing::info!(
        user_id = %user.id,
        exercise_id = %entry.id,
        date = %entry.date,
        "Exercise logged"
    );

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: entry.description,
        duration: entry.duration,
        date: entry.date,
        id: user.id,
    }))
}
