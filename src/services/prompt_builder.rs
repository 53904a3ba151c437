//! Pure prompt construction. Nothing here touches the network, so the
//! instruction text is testable without a model in the loop.

use crate::constants::prompts::{
    DIFFICULTY_GUIDANCE_EASY, DIFFICULTY_GUIDANCE_FALLBACK, DIFFICULTY_GUIDANCE_HARD,
    DIFFICULTY_GUIDANCE_MEDIUM, LESSON_DELIMITER_END, LESSON_DELIMITER_START, LESSON_PROMPT_INTRO,
    LESSON_REQUIRED_SECTIONS, QUIZ_PROMPT_INTRO,
};
use crate::models::dto::request::{LessonRequest, QuizRequest};

/// Guidance clause for the given difficulty level. Unknown levels get the
/// generic fallback rather than an error.
pub fn difficulty_guidance(difficulty: &str) -> &'static str {
    match difficulty.trim() {
        "Easy" => DIFFICULTY_GUIDANCE_EASY,
        "Medium" => DIFFICULTY_GUIDANCE_MEDIUM,
        "Hard" => DIFFICULTY_GUIDANCE_HARD,
        _ => DIFFICULTY_GUIDANCE_FALLBACK,
    }
}

/// Builds the lesson-plan instruction string. Deterministic and total over
/// any request; required-field validation happens in the workflow, not here.
pub fn build_lesson_prompt(request: &LessonRequest) -> String {
    format!(
        "{intro}\n\n\
         Constraints & format:\n\
         - Write the ENTIRE output in {language}.\n\
         - Tailor to grade/level: {grade}\n\
         - Total duration: {duration}\n\
         - Difficulty level: {difficulty}. {guidance}\n\
         - The lesson must be fun, practical, and interactive.\n\
         - Return ONLY Markdown (no code fences). Use headings, bullets, and tables where helpful.\n\n\
         Required sections (use clear Markdown headings):\n\
         {sections}\n\n\
         Subject: {subject}\n\
         Topic: {topic}\n\
         Learning Objectives: {objectives}\n\
         Customization request: {customization}\n",
        intro = LESSON_PROMPT_INTRO,
        language = request.language,
        grade = request.grade,
        duration = request.duration,
        difficulty = request.difficulty,
        guidance = difficulty_guidance(&request.difficulty),
        sections = LESSON_REQUIRED_SECTIONS,
        subject = request.subject,
        topic = request.topic,
        objectives = request.learning_objectives,
        customization = request.customization,
    )
}

/// Builds the quiz instruction string around the full lesson text, embedded
/// verbatim between delimiters so the model is told to derive questions only
/// from the enclosed content.
pub fn build_quiz_prompt(lesson_markdown: &str, request: &QuizRequest) -> String {
    format!(
        "{intro}\n\n\
         - Number of questions: {count}\n\
         - Difficulty: {difficulty}\n\
         - Grade/Level: {grade}\n\
         - Language: {language}\n\
         - Mix question types: multiple choice, short answer, and exactly 1 challenge question.\n\
         - For multiple choice, include 4 options labeled A–D.\n\
         - Provide an **Answer Key** at the end under a collapsible details block.\n\
         - Return the quiz as clean Markdown (no code fences).\n\n\
         {start}\n\
         ---\n\
         {lesson}\n\
         ---\n\
         {end}\n",
        intro = QUIZ_PROMPT_INTRO,
        count = request.question_count(),
        difficulty = request.difficulty,
        grade = request.grade,
        language = request.language,
        start = LESSON_DELIMITER_START,
        lesson = lesson_markdown,
        end = LESSON_DELIMITER_END,
    )
}
