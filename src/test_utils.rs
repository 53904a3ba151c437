#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::language::Language,
        dto::request::{LessonRequest, QuizRequest},
    };

    /// The demo inputs (Science / The Solar System / grade 5 / 1 hour).
    pub fn solar_system_request() -> LessonRequest {
        LessonRequest::example()
    }

    pub fn quiz_request(question_count: u8) -> QuizRequest {
        QuizRequest::new(question_count, "5", "Medium", Language::English)
    }

    /// A small but realistic lesson body for export and quiz tests.
    pub fn sample_lesson_markdown() -> String {
        "# The Solar System\n\n\
         ## Learning Objectives\n\
         - List the eight planets\n\
         - Describe their order from the sun\n\n\
         ## Assessment\n\
         Exit ticket: name two inner planets."
            .to_string()
    }
}
