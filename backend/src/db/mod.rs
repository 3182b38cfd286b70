//! Persistence for users and their exercise logs.

use async_trait::async_trait;

use crate::models::exercise::{ExerciseEntry, NewExercise};
use crate::models::user::{User, UserId, UserRecord};

pub mod memory;
pub mod pool;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, username: &str) -> StoreResult<User>;

    /// All users, oldest first.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// `None` when no user has this id; a user with no exercises is `Some` with an empty log.
    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>>;

    /// Appends to the user's log. `None` when the user does not exist.
    async fn add_exercise(
        &self,
        id: UserId,
        exercise: NewExercise,
    ) -> StoreResult<Option<(User, ExerciseEntry)>>;

    async fn ping(&self) -> StoreResult<()>;
}
