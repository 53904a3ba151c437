//! Fixed prompt text. The builder functions in `services::prompt_builder`
//! interpolate request fields into these skeletons.

/// The ten sections every generated lesson plan must contain, in order.
/// Kept as a separate list so callers can verify a returned plan against it.
pub const REQUIRED_SECTION_TITLES: [&str; 10] = [
    "Title & Overview",
    "Learning Objectives",
    "Required Materials",
    "Prior Knowledge",
    "Lesson Flow with Time Boxes",
    "Interactive Activities",
    "Differentiation & Accommodations",
    "Assessment",
    "Homework or Extension",
    "Safety/Notes",
];

pub const LESSON_PROMPT_INTRO: &str =
    "You are an expert instructional designer and teacher. Create a detailed, classroom-ready LESSON PLAN.";

pub const LESSON_REQUIRED_SECTIONS: &str = "\
1. Title & Overview (1–2 sentences)
2. Learning Objectives (bulleted, measurable)
3. Required Materials (bulleted)
4. Prior Knowledge (short)
5. Lesson Flow with Time Boxes (table: Step | Time | What to do | Teacher notes)
6. Interactive Activities (2–3 activities; include clear instructions)
7. Differentiation & Accommodations (for mixed ability learners)
8. Assessment (formative + one quick exit ticket)
9. Homework or Extension
10. Safety/Notes (if applicable)";

pub const DIFFICULTY_GUIDANCE_EASY: &str =
    "Use simple language, foundational explainers, and concrete everyday examples.";
pub const DIFFICULTY_GUIDANCE_MEDIUM: &str =
    "Use balanced depth, some technical vocabulary, and 1–2 brief real-world examples.";
pub const DIFFICULTY_GUIDANCE_HARD: &str =
    "Use advanced terminology, deeper conceptual links, and include extension tasks for high achievers.";
pub const DIFFICULTY_GUIDANCE_FALLBACK: &str = "Use balanced language and depth.";

pub const QUIZ_PROMPT_INTRO: &str =
    "You are an assessment designer. Based ONLY on the lesson plan content below, create a quiz.";

/// Delimiters around the embedded lesson text in the quiz prompt, so the
/// model can be told to derive questions only from the enclosed content.
pub const LESSON_DELIMITER_START: &str = "LESSON PLAN START";
pub const LESSON_DELIMITER_END: &str = "LESSON PLAN END";
