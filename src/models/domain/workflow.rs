use serde::{Deserialize, Serialize};

use crate::models::domain::{lesson::LessonArtifact, quiz::QuizArtifact};

/// Derived view of which artifacts a `WorkflowState` currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowPhase {
    Empty,
    LessonReady,
    LessonAndQuizReady,
}

/// The artifacts of one planning session. The state exclusively owns both;
/// the fields are private so a quiz can only ever be attached through
/// [`WorkflowState::put_quiz`], which keeps the invariant that a held quiz
/// always references the held lesson.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowState {
    lesson: Option<LessonArtifact>,
    quiz: Option<QuizArtifact>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WorkflowPhase {
        match (&self.lesson, &self.quiz) {
            (None, _) => WorkflowPhase::Empty,
            (Some(_), None) => WorkflowPhase::LessonReady,
            (Some(_), Some(_)) => WorkflowPhase::LessonAndQuizReady,
        }
    }

    pub fn lesson(&self) -> Option<&LessonArtifact> {
        self.lesson.as_ref()
    }

    pub fn quiz(&self) -> Option<&QuizArtifact> {
        self.quiz.as_ref()
    }

    /// Replaces the lesson wholesale and discards any quiz derived from the
    /// previous one.
    pub(crate) fn put_lesson(&mut self, lesson: LessonArtifact) -> &LessonArtifact {
        self.quiz = None;
        self.lesson.insert(lesson)
    }

    /// Attaches a quiz to the currently held lesson. Callers must have built
    /// the quiz from that lesson; `put_lesson` and `clear` are the only ways
    /// the lesson can change underneath it.
    pub(crate) fn put_quiz(&mut self, quiz: QuizArtifact) -> &QuizArtifact {
        self.quiz.insert(quiz)
    }

    pub(crate) fn clear(&mut self) {
        self.lesson = None;
        self.quiz = None;
    }
}
