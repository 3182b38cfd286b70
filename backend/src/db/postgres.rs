use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{pool, StoreError, StoreResult, UserStore};
use crate::models::exercise::{ExerciseEntry, NewExercise};
use crate::models::user::{User, UserId, UserRecord};

const UNIQUE_VIOLATION: &str = "23505";

const LIST_USERS_SQL: &str = "SELECT id, username, created_at FROM users ORDER BY seq ASC";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = pool::create_pool(database_url, max_connections).await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    async fn fetch_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            RETURNING id, username, created_at
            "#,
        )
        .bind(UserId::new())
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateUsername(username.to_string())
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(LIST_USERS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        let Some(user) = self.fetch_user(id).await? else {
            return Ok(None);
        };

        let exercises = sqlx::query_as::<_, ExerciseEntry>(
            r#"
            SELECT id, description, duration, date FROM exercises
            WHERE user_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(UserRecord::new(user, exercises)))
    }

    async fn add_exercise(
        &self,
        id: UserId,
        exercise: NewExercise,
    ) -> StoreResult<Option<(User, ExerciseEntry)>> {
        let Some(user) = self.fetch_user(id).await? else {
            return Ok(None);
        };

        let entry = sqlx::query_as::<_, ExerciseEntry>(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, description, duration, date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(&exercise.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some((user, entry)))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}
