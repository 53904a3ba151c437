use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::lesson::LessonArtifact;

/// A quiz derived from one specific lesson plan. `lesson_id` ties it to the
/// lesson it was generated from; the workflow discards it when that lesson
/// goes away.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizArtifact {
    pub id: String,
    pub markdown: String,
    pub lesson_id: String,
    pub created_at: DateTime<Utc>,
}

impl QuizArtifact {
    pub fn for_lesson(markdown: String, lesson: &LessonArtifact) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            markdown,
            lesson_id: lesson.id.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn derives_from(&self, lesson: &LessonArtifact) -> bool {
        self.lesson_id == lesson.id
    }
}
