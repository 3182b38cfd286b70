use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, UserStore};
use crate::models::exercise::{ExerciseEntry, NewExercise};
use crate::models::user::{User, UserId, UserRecord};

/// In-process store for single-instance runs and tests. Data is lost on restart.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    order: Vec<UserId>,
    users: HashMap<UserId, StoredUser>,
}

struct StoredUser {
    user: User,
    exercises: Vec<ExerciseEntry>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|s| s.user.username == username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        inner.order.push(user.id);
        inner.users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                exercises: Vec::new(),
            },
        );
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.users.get(id))
            .map(|s| s.user.clone())
            .collect())
    }

    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .get(&id)
            .map(|s| UserRecord::new(s.user.clone(), s.exercises.clone())))
    }

    async fn add_exercise(
        &self,
        id: UserId,
        exercise: NewExercise,
    ) -> StoreResult<Option<(User, ExerciseEntry)>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        let entry = exercise.into_entry();
        stored.exercises.push(entry.clone());
        Ok(Some((stored.user.clone(), entry)))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(description: &str, date: &str) -> NewExercise {
        NewExercise {
            description: description.into(),
            duration: 30,
            date: date.into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_in_creation_order() {
        let store = MemoryUserStore::new();
        store.create_user("alice").await.unwrap();
        store.create_user("bob").await.unwrap();
        store.create_user("carol").await.unwrap();

        let names: Vec<String> = store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryUserStore::new();
        store.create_user("alice").await.unwrap();
        let err = store.create_user("alice").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(ref n) if n == "alice"));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_unknown_user_is_none() {
        let store = MemoryUserStore::new();
        assert!(store.find_user(UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_new_user_has_empty_log() {
        let store = MemoryUserStore::new();
        let user = store.create_user("alice").await.unwrap();
        let record = store.find_user(user.id).await.unwrap().unwrap();
        assert_eq!(record.username, "alice");
        assert_eq!(record.id, user.id);
        assert!(record.exercises.is_empty());
    }

    #[tokio::test]
    async fn test_exercises_keep_insertion_order() {
        let store = MemoryUserStore::new();
        let user = store.create_user("alice").await.unwrap();
        store
            .add_exercise(user.id, exercise("swim", "Wed Jan 03 2024"))
            .await
            .unwrap();
        store
            .add_exercise(user.id, exercise("run", "Mon Jan 01 2024"))
            .await
            .unwrap();

        let record = store.find_user(user.id).await.unwrap().unwrap();
        let descriptions: Vec<&str> = record
            .exercises
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["swim", "run"]);
    }

    #[tokio::test]
    async fn test_add_exercise_to_unknown_user() {
        let store = MemoryUserStore::new();
        let result = store
            .add_exercise(UserId::new(), exercise("run", "Mon Jan 01 2024"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_add_exercise_returns_owner_and_entry() {
        let store = MemoryUserStore::new();
        let user = store.create_user("alice").await.unwrap();
        let (owner, entry) = store
            .add_exercise(user.id, exercise("run", "Mon Jan 01 2024"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owner.id, user.id);
        assert_eq!(entry.description, "run");
        assert_eq!(entry.date, "Mon Jan 01 2024");
    }
}
