use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::language::Language;

pub const MIN_QUIZ_QUESTIONS: u8 = 3;
pub const MAX_QUIZ_QUESTIONS: u8 = 15;

/// Difficulty choices a shell should offer. The field itself stays free
/// text; unknown levels degrade to fallback prompt guidance.
pub const DIFFICULTY_LEVELS: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Field values collected by the presentation shell for one lesson
/// generation. Read fresh from the shell at each request; the only copy the
/// workflow keeps is the snapshot inside the artifact it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LessonRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,

    #[validate(length(min = 1, message = "Grade / Level is required"))]
    pub grade: String,

    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,

    #[validate(length(min = 1, message = "Learning Objectives are required"))]
    pub learning_objectives: String,

    /// Tone, activity, and classroom-context notes. May be empty.
    pub customization: String,

    /// Free text; shells offer Easy / Medium / Hard. Anything else falls
    /// back to generic guidance in the prompt.
    pub difficulty: String,

    pub language: Language,
}

impl LessonRequest {
    /// The demo inputs shells prefill when the user asks for an example.
    pub fn example() -> Self {
        Self {
            subject: "Science".to_string(),
            topic: "The Solar System".to_string(),
            grade: "5".to_string(),
            duration: "1 hour".to_string(),
            learning_objectives: "Students will be able to list the eight planets, describe \
                                  their order from the sun, and compare two planets by size and \
                                  composition."
                .to_string(),
            customization: "Make it fun and interactive with a quick game and a hands-on \
                            mini-model activity."
                .to_string(),
            difficulty: "Medium".to_string(),
            language: Language::English,
        }
    }
}

/// Parameters for deriving a quiz from the current lesson. Grade, difficulty
/// and language are re-read from the shell at quiz time, so a quiz can use
/// fresher settings than the lesson it derives from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    question_count: u8,
    pub grade: String,
    pub difficulty: String,
    pub language: Language,
}

impl QuizRequest {
    /// Clamps the requested count into `[MIN_QUIZ_QUESTIONS,
    /// MAX_QUIZ_QUESTIONS]` instead of failing; the shell's slider already
    /// enforces the range, other embedders may not.
    pub fn new(question_count: u8, grade: &str, difficulty: &str, language: Language) -> Self {
        Self {
            question_count: question_count.clamp(MIN_QUIZ_QUESTIONS, MAX_QUIZ_QUESTIONS),
            grade: grade.to_string(),
            difficulty: difficulty.to_string(),
            language,
        }
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}
