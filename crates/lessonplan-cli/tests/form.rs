use async_trait::async_trait;

use lessonplan_cli::form::{
    FormError, GenerationOutcome, LessonForm, Severity, EXPORT_FAILED, GENERATION_FAILED,
};
use lessonplan_core::models::{LessonPlan, ListField, OutlineSection, ScalarField};
use lessonplan_export::styles::LayoutStyles;
use lessonplan_gemini::error::GenerationError;
use lessonplan_gemini::generator::TextGenerator;

/// Replies with a fixed result and records the prompt it was given.
struct FakeGenerator {
    reply: Result<String, String>,
    seen: std::sync::Mutex<Vec<String>>,
}

impl FakeGenerator {
    fn ok(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Default::default(),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Default::default(),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GenerationError::Api {
                status: 429,
                message: message.clone(),
            }),
        }
    }
}

#[tokio::test]
async fn successful_generation_sets_ai_content() {
    let mut form = LessonForm::default();
    let generator = FakeGenerator::ok("Detailed content");

    let outcome = form.generate_with(&generator).await.unwrap();

    assert_eq!(outcome, GenerationOutcome::Applied);
    assert_eq!(form.draft().ai_content(), Some("Detailed content"));
    assert!(!form.is_generating());
    assert!(form.error_banner().is_none());

    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);

    let prompts = generator.seen.lock().unwrap();
    assert!(prompts[0].contains("Topic: Photosynthesis: Nature's Solar Power"));
}

#[tokio::test]
async fn failed_generation_keeps_previous_ai_content() {
    let mut form = LessonForm::default();
    form.set_ai_content("Earlier draft");

    let outcome = form
        .generate_with(&FakeGenerator::failing("quota exceeded"))
        .await
        .unwrap();

    assert_eq!(outcome, GenerationOutcome::Failed);
    assert_eq!(form.draft().ai_content(), Some("Earlier draft"));
    assert_eq!(form.error_banner(), Some(GENERATION_FAILED));
    assert!(!form.is_generating());

    let notes = form.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert_eq!(notes[0].description, GENERATION_FAILED);
}

#[test]
fn missing_credential_reports_configuration_message() {
    let mut form = LessonForm::default();
    let request = form.begin_generation().unwrap();

    let outcome = form.complete_generation(
        request.id,
        Err(GenerationError::MissingCredential {
            source_name: "environment variable GEMINI_API_KEY".to_string(),
        }),
    );

    assert_eq!(outcome, GenerationOutcome::Failed);
    let banner = form.error_banner().unwrap();
    assert!(banner.starts_with("Please configure your Gemini API key"));
    assert!(banner.contains("GEMINI_API_KEY"));
    assert!(form.draft().ai_content.is_none());
}

#[test]
fn second_request_is_refused_while_one_is_in_flight() {
    let mut form = LessonForm::default();
    let _first = form.begin_generation().unwrap();

    assert!(form.is_generating());
    assert!(matches!(
        form.begin_generation(),
        Err(FormError::GenerationInFlight)
    ));
}

#[test]
fn stale_reply_is_discarded_after_cancel() {
    let mut form = LessonForm::default();
    let stale = form.begin_generation().unwrap();
    form.cancel_generation();

    let current = form.begin_generation().unwrap();
    assert_ne!(stale.id, current.id);

    let outcome = form.complete_generation(stale.id, Ok("old reply".to_string()));
    assert_eq!(outcome, GenerationOutcome::Discarded);
    assert!(form.draft().ai_content.is_none());
    assert!(form.is_generating());

    let outcome = form.complete_generation(current.id, Ok("new reply".to_string()));
    assert_eq!(outcome, GenerationOutcome::Applied);
    assert_eq!(form.draft().ai_content(), Some("new reply"));
}

#[test]
fn duplicate_completion_is_discarded() {
    let mut form = LessonForm::default();
    let request = form.begin_generation().unwrap();

    form.complete_generation(request.id, Ok("first".to_string()));
    let outcome = form.complete_generation(request.id, Ok("second".to_string()));

    assert_eq!(outcome, GenerationOutcome::Discarded);
    assert_eq!(form.draft().ai_content(), Some("first"));
}

#[test]
fn prompt_reflects_edits_made_before_request() {
    let mut form = LessonForm::new(LessonPlan::new());
    form.set_scalar(ScalarField::Topic, "Volcanoes");
    form.add_list_item(ListField::SubTopics);
    form.set_list_item(ListField::SubTopics, 0, "Magma");

    let request = form.begin_generation().unwrap();
    assert!(request.prompt.contains("Topic: Volcanoes\n"));
    assert!(request.prompt.contains("Sub-topics: Magma\n"));
}

#[test]
fn list_edits_ignore_out_of_range_indices() {
    let mut form = LessonForm::new(LessonPlan::new());
    form.add_list_item(ListField::Materials);
    form.add_list_item(ListField::Materials);

    assert!(form.set_list_item(ListField::Materials, 1, "Glue"));
    assert!(!form.set_list_item(ListField::Materials, 5, "Tape"));
    assert!(form.remove_list_item(ListField::Materials, 0));
    assert!(!form.remove_list_item(ListField::Materials, 3));

    assert_eq!(form.draft().materials, vec!["Glue".to_string()]);
}

#[test]
fn edits_bump_updated_at() {
    let mut form = LessonForm::new(LessonPlan::new());
    let before = form.draft().updated_at;
    std::thread::sleep(std::time::Duration::from_millis(2));

    form.set_outline(OutlineSection::Closure, "Exit ticket");

    assert_eq!(form.draft().outline.closure, "Exit ticket");
    assert!(form.draft().updated_at > before);
}

#[test]
fn ai_editing_toggles() {
    let mut form = LessonForm::default();
    assert!(!form.is_editing_ai());
    assert!(form.toggle_ai_editing());
    assert!(!form.toggle_ai_editing());
}

#[test]
fn export_produces_document_and_notification() {
    let mut form = LessonForm::default();
    let document = form.export().expect("sample should export");

    assert_eq!(document.filename, "photosynthesis_natures_solar_power.pdf");
    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);
    assert_ne!(notes[0].description, EXPORT_FAILED);
}

#[test]
fn submit_rejects_missing_required_field() {
    let mut form = LessonForm::default();
    form.set_scalar(ScalarField::MainConcept, "");

    assert!(form.submit().is_none());
    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert!(notes[0].description.contains("mainConcept"));
}

#[test]
fn submit_exports_complete_plan() {
    let mut form = LessonForm::default();
    assert!(form.submit().is_some());

    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.severity == Severity::Success));
}

fn unusable_styles() -> LayoutStyles {
    LayoutStyles {
        content_width: 0.0,
        ..LayoutStyles::default()
    }
}

#[test]
fn export_failure_becomes_error_notification() {
    let mut form = LessonForm::default().with_styles(unusable_styles());

    assert!(form.export().is_none());
    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert_eq!(notes[0].description, EXPORT_FAILED);
}

#[test]
fn submit_reports_export_failure_without_success_message() {
    let mut form = LessonForm::default().with_styles(unusable_styles());

    assert!(form.submit().is_none());
    let notes = form.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description, EXPORT_FAILED);
}
