use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{lesson::LessonArtifact, quiz::QuizArtifact, workflow::WorkflowState},
        dto::request::{LessonRequest, QuizRequest},
    },
    services::{model_service::CompletionModel, prompt_builder},
};

/// Drives the two-stage lesson -> quiz workflow against a completion model.
///
/// Every transition borrows the `WorkflowState` mutably for its full
/// duration, so at most one state-mutating call can be in flight per state
/// instance; single-flight holds by construction, without locks.
pub struct PlannerService {
    model: Arc<dyn CompletionModel>,
}

impl PlannerService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Generates a new lesson plan from the given inputs.
    ///
    /// Valid from any phase. Required fields are checked before any remote
    /// call; a `ValidationError` leaves the state untouched. A successful
    /// generation replaces the held lesson and discards any quiz derived
    /// from the previous one. A failed generation changes nothing: the
    /// prior lesson, and any prior quiz, stay usable.
    pub async fn request_lesson<'a>(
        &self,
        state: &'a mut WorkflowState,
        request: &LessonRequest,
    ) -> AppResult<&'a LessonArtifact> {
        request.validate()?;

        let prompt = prompt_builder::build_lesson_prompt(request);
        log::info!(
            "requesting lesson plan: subject='{}' topic='{}' language={}",
            request.subject,
            request.topic,
            request.language
        );

        let markdown = self.model.complete(&prompt).await?;
        Ok(state.put_lesson(LessonArtifact::new(markdown, request.clone())))
    }

    /// Derives a quiz from the currently held lesson.
    ///
    /// Requires a lesson; otherwise fails with a `PreconditionError` before
    /// any remote call. A failed generation leaves the state unchanged, so
    /// the lesson remains visible and usable after a failed quiz attempt.
    pub async fn request_quiz<'a>(
        &self,
        state: &'a mut WorkflowState,
        request: &QuizRequest,
    ) -> AppResult<&'a QuizArtifact> {
        let prompt = match state.lesson() {
            Some(lesson) => prompt_builder::build_quiz_prompt(&lesson.markdown, request),
            None => {
                return Err(AppError::PreconditionError(
                    "no lesson present".to_string(),
                ))
            }
        };

        log::info!(
            "requesting quiz: questions={} language={}",
            request.question_count(),
            request.language
        );

        let markdown = self.model.complete(&prompt).await?;
        let lesson = state
            .lesson()
            .expect("lesson cannot change while the state is mutably borrowed");
        let quiz = QuizArtifact::for_lesson(markdown, lesson);
        Ok(state.put_quiz(quiz))
    }

    /// Clears both artifacts and returns the workflow to its initial phase.
    /// Never fails.
    pub fn reset(&self, state: &mut WorkflowState) {
        state.clear();
        log::info!("workflow reset");
    }
}
