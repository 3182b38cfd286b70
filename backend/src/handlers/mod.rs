use crate::error::{AppError, AppResult};
use crate::models::user::UserId;

pub mod exercises;
pub mod health;
pub mod index;
pub mod logs;
pub mod users;

fn parse_user_id(raw: &str) -> AppResult<UserId> {
    raw.parse()
        .map_err(|_| AppError::InvalidParameter(format!("'{}' is not a valid user id", raw)))
}
