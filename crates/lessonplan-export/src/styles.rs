use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Which emitted lines check the page-break threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageBreakPolicy {
    /// Every line, fixed or wrapped, breaks to a new page once the cursor is
    /// past the threshold.
    #[default]
    EveryLine,
    /// Only lines of wrapped text blocks check the threshold; titles, labels
    /// and bullets are written wherever the cursor is.
    WrappedOnly,
}

/// Page geometry and typography for the PDF layout.
///
/// Lengths are millimetres measured from the top-left corner of the page;
/// font sizes are points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyles {
    /// A4 by default.
    pub page_width: f32,
    pub page_height: f32,

    /// Left edge of every line.
    pub margin_left: f32,

    /// Cursor position at the start of each page.
    pub margin_top: f32,

    /// Column width wrapped text is fitted to.
    pub content_width: f32,

    /// Advance after a fixed (unwrapped) line.
    pub line_height: f32,

    /// Advance after each line of a wrapped block.
    pub wrapped_line_height: f32,

    /// Extra space after a section or wrapped block.
    pub block_gap: f32,

    /// A line whose cursor is below this goes to a new page.
    pub page_break_threshold: f32,

    /// The generated-content section starts on a fresh page when the
    /// cursor is already below this.
    pub low_space_threshold: f32,

    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,

    pub page_break_policy: PageBreakPolicy,
}

impl Default for LayoutStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 20.0,
            margin_top: 20.0,
            content_width: 170.0,
            line_height: 10.0,
            wrapped_line_height: 6.0,
            block_gap: 5.0,
            page_break_threshold: 280.0,
            low_space_threshold: 200.0,
            title_size: 18.0,
            heading_size: 14.0,
            body_size: 12.0,
            page_break_policy: PageBreakPolicy::default(),
        }
    }
}

impl LayoutStyles {
    pub fn with_page_break_policy(mut self, policy: PageBreakPolicy) -> Self {
        self.page_break_policy = policy;
        self
    }

    /// Reject geometry that cannot produce a readable page.
    pub fn validate(&self) -> Result<(), ExportError> {
        let positive = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("content_width", self.content_width),
            ("line_height", self.line_height),
            ("wrapped_line_height", self.wrapped_line_height),
            ("title_size", self.title_size),
            ("heading_size", self.heading_size),
            ("body_size", self.body_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::InvalidStyles(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.margin_top >= self.page_break_threshold
            || self.page_break_threshold > self.page_height
        {
            return Err(ExportError::InvalidStyles(format!(
                "page_break_threshold {} must lie between margin_top {} and page_height {}",
                self.page_break_threshold, self.margin_top, self.page_height
            )));
        }
        Ok(())
    }
}
