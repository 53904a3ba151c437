pub mod language;
pub mod lesson;
pub mod quiz;
pub mod workflow;

pub use language::Language;
pub use lesson::LessonArtifact;
pub use quiz::QuizArtifact;
pub use workflow::{WorkflowPhase, WorkflowState};
