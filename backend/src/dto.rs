//! # Exercise Tracker — Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from a form body
//! - `*Response` → serialized to client JSON
//! - User ids are always serialized under `_id`

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{User, UserId};
use crate::services::log_query::LogEntry;

// ============================================================================
// Users
// ============================================================================

/// POST /api/users
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: String,
}

/// Element of GET /api/users and response of POST /api/users
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: UserId,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            id: u.id,
        }
    }
}

// ============================================================================
// Exercises
// ============================================================================

/// POST /api/users/{id}/exercises
///
/// Fields arrive as raw form strings so malformed numbers and dates get a
/// readable validation error instead of a generic form rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,

    /// Whole minutes
    #[serde(default)]
    pub duration: String,

    /// `yyyy-mm-dd`. Missing or empty means today.
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: UserId,
}

// ============================================================================
// Logs
// ============================================================================

/// GET /api/users/{id}/logs
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    /// Total exercises logged, regardless of filters
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: UserId,
    pub log: Vec<LogEntry>,
}
