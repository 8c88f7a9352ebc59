//! Instruction text sent to the model for a lesson plan draft.
//!
//! The prompt is a pure function of the plan: identical plans always yield
//! byte-identical prompts. Blank fields render as empty text after their
//! label rather than being dropped, so the template shape never changes.

use lessonplan_core::models::LessonPlan;

const LIST_DELIMITER: &str = ", ";

const SECTION_TEMPLATE: &str = "\
Please provide a structured response with the following sections:
1. Detailed Lesson Content
   - Key concepts and vocabulary
   - Step-by-step teaching points
   - Examples and analogies

2. Suggested Classroom Activities
   - Warm-up activities
   - Main learning activities
   - Group work suggestions
   - Interactive elements

3. Assessment Strategies
   - Formative assessment questions
   - Exit ticket ideas
   - Extension activities
   - Differentiation suggestions

Format the response in a clear, organized manner suitable for a professional lesson plan.";

/// Build the generation prompt for a (possibly partially filled) plan.
pub fn build_lesson_prompt(plan: &LessonPlan) -> String {
    format!(
        "Create a detailed lesson plan for the following:\n\
         Topic: {topic}\n\
         Grade Level: {grade}\n\
         Main Concept: {concept}\n\
         Sub-topics: {sub_topics}\n\
         Learning Objectives: {objectives}\n\
         \n\
         {SECTION_TEMPLATE}",
        topic = plan.topic,
        grade = plan.grade_level,
        concept = plan.main_concept,
        sub_topics = plan.sub_topics.join(LIST_DELIMITER),
        objectives = plan.objectives.join(LIST_DELIMITER),
    )
}
