use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tracing::info;

use lessonplan_core::filename::export_filename;
use lessonplan_core::models::LessonPlan;

use crate::error::ExportError;
use crate::layout::{layout_lesson_plan, DEFAULT_TITLE};
use crate::pdf::generate_pdf;
use crate::styles::LayoutStyles;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A finished export: the PDF bytes and the name to download them under.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Self-contained `data:` URI carrying the filename and the base64 payload.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{PDF_MIME_TYPE};filename={};base64,{}",
            self.filename,
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}

/// Lay out and serialize a plan as a downloadable PDF.
pub fn export_lesson_plan(
    plan: &LessonPlan,
    styles: &LayoutStyles,
) -> Result<ExportedDocument, ExportError> {
    styles.validate()?;
    let layout = layout_lesson_plan(plan, styles);
    let title = if plan.topic.is_empty() {
        DEFAULT_TITLE
    } else {
        plan.topic.as_str()
    };
    let bytes = generate_pdf(&layout, title)?;
    let filename = export_filename(&plan.topic);

    info!(
        plan_id = %plan.id,
        filename = %filename,
        pages = layout.page_count(),
        size = bytes.len(),
        "lesson plan exported"
    );

    Ok(ExportedDocument {
        filename,
        page_count: layout.page_count(),
        bytes,
    })
}
