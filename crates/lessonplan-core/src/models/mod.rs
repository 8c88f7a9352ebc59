pub mod lesson_plan;
pub mod outline;
pub mod sample;

pub use lesson_plan::{LessonPlan, ListField, ScalarField};
pub use outline::{LessonOutline, OutlineSection};
