use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::LessonRequest;

/// A generated lesson plan held in workflow state, together with a snapshot
/// of the inputs that produced it. Immutable once created; a later
/// generation replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonArtifact {
    pub id: String,
    pub markdown: String,
    pub request: LessonRequest,
    pub created_at: DateTime<Utc>,
}

impl LessonArtifact {
    pub fn new(markdown: String, request: LessonRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            markdown,
            request,
            created_at: Utc::now(),
        }
    }
}
