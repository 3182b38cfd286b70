use axum::{extract::State, Form, Json};
use validator::Validate;

use crate::dto::{CreateUserRequest, UserSummary};
use crate::error::{AppError, AppResult};
use crate::AppState;

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Form(body): Form<CreateUserRequest>,
) -> AppResult<Json<UserSummary>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let username = body.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }

    let user = state.store.create_user(username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(user.into()))
}
