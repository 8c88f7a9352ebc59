//! Linearize a lesson plan into pages of positioned text lines.
//!
//! A single vertical cursor walks down the page. Fixed lines (title, fields,
//! headings, labels, bullets) advance it by the line height; wrapped blocks
//! advance it per wrapped line and then by the block gap. Page breaks depend
//! on [`PageBreakPolicy`]: wrapped lines always check the threshold, fixed
//! lines only under [`PageBreakPolicy::EveryLine`].
//!
//! Section order is fixed: title, basic information, sub-topics, materials,
//! objectives, the five outline sections, then generated content. List
//! sections and generated content are omitted when empty; the outline
//! sections are always present.

use serde::{Deserialize, Serialize};

use lessonplan_core::models::{LessonPlan, ListField};

use crate::metrics::{wrap_text, FontWeight};
use crate::styles::{LayoutStyles, PageBreakPolicy};

pub const DEFAULT_TITLE: &str = "Lesson Plan";
pub const OUTLINE_HEADING: &str = "Lesson Outline";
pub const AI_CONTENT_HEADING: &str = "AI-Generated Content";
const BULLET: &str = "\u{2022}";

/// What a line represents in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Field,
    Heading,
    Label,
    Bullet,
    Body,
}

/// A single line of text anchored at its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    /// Millimetres from the left edge.
    pub x: f32,
    /// Millimetres from the top edge.
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All lines with their zero-based page index, in document order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.lines.iter().map(move |line| (index, line)))
    }

    /// Text of every line of the given kind, in document order.
    pub fn texts_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines()
            .filter(|(_, line)| line.kind == kind)
            .map(|(_, line)| line.text.as_str())
            .collect()
    }
}

fn list_heading(field: ListField) -> &'static str {
    match field {
        ListField::SubTopics => "Sub-topics:",
        ListField::Materials => "Materials Needed:",
        ListField::Objectives => "Learning Objectives:",
    }
}

/// Lay out a plan. Never fails: blank fields are written as empty text.
pub fn layout_lesson_plan(plan: &LessonPlan, styles: &LayoutStyles) -> DocumentLayout {
    let mut writer = PageWriter::new(styles);

    let title = if plan.topic.is_empty() {
        DEFAULT_TITLE
    } else {
        plan.topic.as_str()
    };
    writer.fixed(title, styles.title_size, FontWeight::Bold, LineKind::Title);
    writer.gap();

    writer.fixed(
        &format!("Grade Level: {}", plan.grade_level),
        styles.body_size,
        FontWeight::Regular,
        LineKind::Field,
    );
    writer.fixed(
        &format!("Main Concept: {}", plan.main_concept),
        styles.body_size,
        FontWeight::Regular,
        LineKind::Field,
    );
    writer.gap();

    for field in ListField::ALL {
        let items = plan.list(field);
        if items.is_empty() {
            continue;
        }
        writer.fixed(list_heading(field), styles.heading_size, FontWeight::Bold, LineKind::Heading);
        for item in items {
            writer.fixed(
                &format!("{BULLET} {item}"),
                styles.body_size,
                FontWeight::Regular,
                LineKind::Bullet,
            );
        }
        writer.gap();
    }

    writer.fixed(OUTLINE_HEADING, styles.heading_size, FontWeight::Bold, LineKind::Heading);
    writer.gap();
    for (section, body) in plan.outline.sections() {
        writer.fixed(
            &format!("{}:", section.label()),
            styles.body_size,
            FontWeight::Bold,
            LineKind::Label,
        );
        writer.wrapped(body, styles.body_size, FontWeight::Regular);
    }

    if let Some(content) = plan.ai_content() {
        if writer.cursor() > styles.low_space_threshold {
            writer.new_page();
        }
        writer.fixed(AI_CONTENT_HEADING, styles.heading_size, FontWeight::Bold, LineKind::Heading);
        writer.gap();
        writer.wrapped(content, styles.body_size, FontWeight::Regular);
    }

    writer.finish()
}

struct PageWriter<'a> {
    styles: &'a LayoutStyles,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(styles: &'a LayoutStyles) -> Self {
        Self {
            styles,
            pages: vec![Page::default()],
            y: styles.margin_top,
        }
    }

    fn cursor(&self) -> f32 {
        self.y
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.styles.margin_top;
    }

    fn break_if_past_threshold(&mut self) {
        if self.y > self.styles.page_break_threshold {
            self.new_page();
        }
    }

    fn emit(&mut self, text: &str, size: f32, weight: FontWeight, kind: LineKind) {
        let line = Line {
            text: text.to_string(),
            x: self.styles.margin_left,
            y: self.y,
            size,
            weight,
            kind,
        };
        // `pages` starts non-empty and only grows.
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    fn fixed(&mut self, text: &str, size: f32, weight: FontWeight, kind: LineKind) {
        if self.styles.page_break_policy == PageBreakPolicy::EveryLine {
            self.break_if_past_threshold();
        }
        self.emit(text, size, weight, kind);
        self.y += self.styles.line_height;
    }

    fn wrapped(&mut self, text: &str, size: f32, weight: FontWeight) {
        for line in wrap_text(text, size, weight, self.styles.content_width) {
            self.break_if_past_threshold();
            self.emit(&line, size, weight, LineKind::Body);
            self.y += self.styles.wrapped_line_height;
        }
        self.gap();
    }

    fn gap(&mut self) {
        self.y += self.styles.block_gap;
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            page_width: self.styles.page_width,
            page_height: self.styles.page_height,
            pages: self.pages,
        }
    }
}
