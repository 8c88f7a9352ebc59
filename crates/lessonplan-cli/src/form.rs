//! In-memory lesson plan draft and the edits, generation, and export flows
//! that act on it.
//!
//! Generation is split into [`LessonForm::begin_generation`] and
//! [`LessonForm::complete_generation`] so a caller can keep editing while the
//! request is awaited. Each request carries an id; a completion whose id is
//! not the active request is discarded, so a late response never overwrites
//! a newer draft. Only one request may be active at a time.

use thiserror::Error;
use tracing::{error, info, warn};

use lessonplan_core::error::CoreError;
use lessonplan_core::models::{LessonPlan, ListField, OutlineSection, ScalarField};
use lessonplan_export::document::{export_lesson_plan, ExportedDocument};
use lessonplan_export::styles::LayoutStyles;
use lessonplan_gemini::error::GenerationError;
use lessonplan_gemini::generator::TextGenerator;
use lessonplan_gemini::prompt::build_lesson_prompt;

pub const GENERATION_FAILED: &str =
    "Failed to generate lesson plan. Please check your API key and try again.";
pub const EXPORT_FAILED: &str = "Failed to generate PDF. Please try again.";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("a generation request is already in flight")]
    GenerationInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: "Success!".to_string(),
            description: description.into(),
        }
    }

    fn error(description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// An issued generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub id: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The reply was merged into the draft.
    Applied,
    /// The call failed; the draft is unchanged.
    Failed,
    /// The reply belonged to a superseded or cancelled request.
    Discarded,
}

pub struct LessonForm {
    draft: LessonPlan,
    styles: LayoutStyles,
    active_request: Option<u64>,
    next_request_id: u64,
    error_banner: Option<String>,
    editing_ai: bool,
    notifications: Vec<Notification>,
}

impl Default for LessonForm {
    fn default() -> Self {
        Self::new(LessonPlan::sample())
    }
}

impl LessonForm {
    pub fn new(draft: LessonPlan) -> Self {
        Self {
            draft,
            styles: LayoutStyles::default(),
            active_request: None,
            next_request_id: 1,
            error_banner: None,
            editing_ai: false,
            notifications: Vec::new(),
        }
    }

    pub fn with_styles(mut self, styles: LayoutStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn draft(&self) -> &LessonPlan {
        &self.draft
    }

    pub fn into_draft(self) -> LessonPlan {
        self.draft
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.active_request.is_some()
    }

    pub fn is_editing_ai(&self) -> bool {
        self.editing_ai
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Edits ────────────────────────────────────────────────────────────────

    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.draft.scalar_mut(field) = value.into();
        self.draft.touch();
    }

    /// Replace one list entry. Returns `false` if `index` is out of range.
    pub fn set_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> bool {
        let Some(item) = self.draft.list_mut(field).get_mut(index) else {
            return false;
        };
        *item = value.into();
        self.draft.touch();
        true
    }

    /// Append an empty entry for the user to fill in.
    pub fn add_list_item(&mut self, field: ListField) {
        self.draft.list_mut(field).push(String::new());
        self.draft.touch();
    }

    /// Remove one list entry. Returns `false` if `index` is out of range.
    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> bool {
        let items = self.draft.list_mut(field);
        if index >= items.len() {
            return false;
        }
        items.remove(index);
        self.draft.touch();
        true
    }

    pub fn set_outline(&mut self, section: OutlineSection, value: impl Into<String>) {
        *self.draft.outline.get_mut(section) = value.into();
        self.draft.touch();
    }

    pub fn set_ai_content(&mut self, value: impl Into<String>) {
        self.draft.ai_content = Some(value.into());
        self.draft.touch();
    }

    pub fn toggle_ai_editing(&mut self) -> bool {
        self.editing_ai = !self.editing_ai;
        self.editing_ai
    }

    // ── Generation ───────────────────────────────────────────────────────────

    /// Issue a generation request for the current draft.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, FormError> {
        if self.active_request.is_some() {
            return Err(FormError::GenerationInFlight);
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.active_request = Some(id);
        self.error_banner = None;

        info!(request_id = id, plan_id = %self.draft.id, "generation requested");

        Ok(GenerationRequest {
            id,
            prompt: build_lesson_prompt(&self.draft),
        })
    }

    /// Forget the active request; its reply will be discarded.
    pub fn cancel_generation(&mut self) {
        if let Some(id) = self.active_request.take() {
            info!(request_id = id, "generation cancelled");
        }
    }

    /// Apply the reply to request `id`.
    pub fn complete_generation(
        &mut self,
        id: u64,
        result: Result<String, GenerationError>,
    ) -> GenerationOutcome {
        if self.active_request != Some(id) {
            warn!(
                request_id = id,
                active = ?self.active_request,
                "discarding stale generation reply"
            );
            return GenerationOutcome::Discarded;
        }
        self.active_request = None;

        match result {
            Ok(content) => {
                self.draft.ai_content = Some(content);
                self.draft.touch();
                self.notifications
                    .push(Notification::success("AI content generated successfully."));
                GenerationOutcome::Applied
            }
            Err(e) => {
                error!(request_id = id, error = %e, "generation failed");
                let message = if e.is_configuration() {
                    format!("Please configure your Gemini API key: {e}")
                } else {
                    GENERATION_FAILED.to_string()
                };
                self.error_banner = Some(message.clone());
                self.notifications.push(Notification::error(message));
                GenerationOutcome::Failed
            }
        }
    }

    /// Run one full generation round trip against `generator`.
    pub async fn generate_with<G>(&mut self, generator: &G) -> Result<GenerationOutcome, FormError>
    where
        G: TextGenerator + ?Sized,
    {
        let request = self.begin_generation()?;
        let result = generator.generate(&request.prompt).await;
        Ok(self.complete_generation(request.id, result))
    }

    // ── Export ───────────────────────────────────────────────────────────────

    /// Render the draft as a PDF. Failures become an error notification.
    pub fn export(&mut self) -> Option<ExportedDocument> {
        match export_lesson_plan(&self.draft, &self.styles) {
            Ok(document) => {
                self.notifications
                    .push(Notification::success("PDF downloaded successfully."));
                Some(document)
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.notifications.push(Notification::error(EXPORT_FAILED));
                None
            }
        }
    }

    /// Check required fields, then export.
    pub fn submit(&mut self) -> Option<ExportedDocument> {
        if let Err(e) = self.draft.validate() {
            let description = match e {
                CoreError::MissingField(field) => {
                    format!("Failed to create lesson plan: {field} is required.")
                }
                other => format!("Failed to create lesson plan: {other}"),
            };
            self.notifications.push(Notification::error(description));
            return None;
        }

        let document = self.export()?;
        self.notifications
            .push(Notification::success("Lesson plan created successfully."));
        Some(document)
    }
}
