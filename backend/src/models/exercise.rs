use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One logged exercise. `date` is kept in display form (`Mon Jan 01 2024`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl NewExercise {
    pub fn into_entry(self) -> ExerciseEntry {
        ExerciseEntry {
            id: Uuid::new_v4(),
            description: self.description,
            duration: self.duration,
            date: self.date,
        }
    }
}
