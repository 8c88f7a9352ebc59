use lessonplan_core::models::{LessonOutline, LessonPlan};
use lessonplan_export::layout::{layout_lesson_plan, DocumentLayout, LineKind};
use lessonplan_export::styles::{LayoutStyles, PageBreakPolicy};

const OUTLINE_LABELS: [&str; 5] = [
    "Introduction:",
    "Development:",
    "Practice:",
    "Assessment:",
    "Closure:",
];

/// Plan with empty lists and one-line outline bodies.
fn bare_plan() -> LessonPlan {
    LessonPlan {
        topic: "Fractions".to_string(),
        grade_level: "4th Grade".to_string(),
        main_concept: "Parts of a whole".to_string(),
        outline: LessonOutline {
            introduction: "intro".to_string(),
            development: "develop".to_string(),
            practice: "practice".to_string(),
            assessment: "assess".to_string(),
            closure: "close".to_string(),
        },
        ..LessonPlan::new()
    }
}

fn numbered_lines(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|i| format!("{prefix} {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn find<'a>(
    layout: &'a DocumentLayout,
    text: &str,
) -> (usize, &'a lessonplan_export::layout::Line) {
    layout
        .lines()
        .find(|(_, line)| line.text == text)
        .unwrap_or_else(|| panic!("line {text:?} not found"))
}

#[test]
fn first_line_starts_at_top_margin() {
    let layout = layout_lesson_plan(&bare_plan(), &LayoutStyles::default());
    let (page, title) = layout.lines().next().unwrap();

    assert_eq!(page, 0);
    assert_eq!(title.kind, LineKind::Title);
    assert_eq!(title.text, "Fractions");
    assert_eq!((title.x, title.y), (20.0, 20.0));
}

#[test]
fn empty_topic_uses_default_title() {
    let mut plan = bare_plan();
    plan.topic.clear();
    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
    assert_eq!(layout.texts_of(LineKind::Title), vec!["Lesson Plan"]);
}

#[test]
fn basic_information_lines_follow_title() {
    let layout = layout_lesson_plan(&bare_plan(), &LayoutStyles::default());
    assert_eq!(
        layout.texts_of(LineKind::Field),
        vec!["Grade Level: 4th Grade", "Main Concept: Parts of a whole"]
    );
}

#[test]
fn empty_lists_omit_their_headings() {
    let layout = layout_lesson_plan(&bare_plan(), &LayoutStyles::default());
    assert_eq!(layout.texts_of(LineKind::Heading), vec!["Lesson Outline"]);
    assert!(layout.texts_of(LineKind::Bullet).is_empty());
}

#[test]
fn populated_lists_render_in_fixed_order() {
    let layout = layout_lesson_plan(&LessonPlan::sample(), &LayoutStyles::default());
    assert_eq!(
        layout.texts_of(LineKind::Heading),
        vec![
            "Sub-topics:",
            "Materials Needed:",
            "Learning Objectives:",
            "Lesson Outline"
        ]
    );
    let bullets = layout.texts_of(LineKind::Bullet);
    assert_eq!(bullets.len(), 4 + 5 + 4);
    assert_eq!(bullets[0], "\u{2022} Light energy and chlorophyll");
    assert_eq!(bullets[4], "\u{2022} Live plants");
}

#[test]
fn only_some_lists_empty() {
    let mut plan = bare_plan();
    plan.materials = vec!["Ruler".to_string()];
    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
    assert_eq!(
        layout.texts_of(LineKind::Heading),
        vec!["Materials Needed:", "Lesson Outline"]
    );
}

#[test]
fn five_outline_labels_always_present_in_order() {
    for plan in [bare_plan(), LessonPlan::sample(), LessonPlan::new()] {
        let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
        assert_eq!(layout.texts_of(LineKind::Label), OUTLINE_LABELS);
    }
}

#[test]
fn blank_outline_body_still_advances_one_line() {
    let layout = layout_lesson_plan(&LessonPlan::new(), &LayoutStyles::default());
    let bodies = layout.texts_of(LineKind::Body);
    assert_eq!(bodies, vec![""; 5]);
}

#[test]
fn long_outline_section_breaks_page_exactly_once() {
    let mut plan = bare_plan();
    plan.outline.introduction = numbered_lines("Step", 40);

    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
    assert_eq!(layout.page_count(), 2);

    // Introduction body starts at 85mm and advances 6mm per line, so the
    // 34th line is the first one past the 280mm threshold.
    let (page, last_on_first) = find(&layout, "Step 33");
    assert_eq!((page, last_on_first.y), (0, 277.0));

    let (page, first_on_second) = find(&layout, "Step 34");
    assert_eq!(page, 1);
    assert_eq!(first_on_second.y, 20.0);

    let step_pages: Vec<usize> = layout
        .lines()
        .filter(|(_, line)| line.text.starts_with("Step "))
        .map(|(page, _)| page)
        .collect();
    let breaks = step_pages.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(breaks, 1);

    assert_eq!(layout.texts_of(LineKind::Label), OUTLINE_LABELS);
}

#[test]
fn ai_content_starts_new_page_when_cursor_is_low() {
    let mut plan = bare_plan();
    // Five intro lines push the cursor to 204mm after the outline.
    plan.outline.introduction = numbered_lines("Line", 5);
    plan.ai_content = Some("Generated content".to_string());

    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
    let (page, heading) = find(&layout, "AI-Generated Content");
    assert_eq!(page, 1);
    assert_eq!(heading.y, 20.0);

    let (page, closure) = find(&layout, "close");
    assert_eq!(page, 0);
    assert_eq!(closure.y, 193.0);
}

#[test]
fn ai_content_stays_on_page_when_space_remains() {
    let mut plan = bare_plan();
    plan.ai_content = Some("Generated content".to_string());

    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
    let (page, heading) = find(&layout, "AI-Generated Content");
    assert_eq!(page, 0);
    assert_eq!(heading.y, 180.0);
    assert_eq!(layout.page_count(), 1);

    let (_, body) = find(&layout, "Generated content");
    assert_eq!(body.kind, LineKind::Body);
    assert_eq!(body.y, 195.0);
}

#[test]
fn absent_or_empty_ai_content_is_omitted() {
    let mut plan = bare_plan();
    for content in [None, Some(String::new())] {
        plan.ai_content = content;
        let layout = layout_lesson_plan(&plan, &LayoutStyles::default());
        assert!(!layout.texts_of(LineKind::Heading).contains(&"AI-Generated Content"));
    }
}

#[test]
fn every_line_policy_breaks_long_bullet_lists() {
    let mut plan = bare_plan();
    plan.sub_topics = (1..=30).map(|i| format!("Topic {i}")).collect();

    let layout = layout_lesson_plan(&plan, &LayoutStyles::default());

    // Bullets start at 70mm, 10mm apart: the one at 290mm moves.
    let (page, at_threshold) = find(&layout, "\u{2022} Topic 22");
    assert_eq!((page, at_threshold.y), (0, 280.0));
    let (page, moved) = find(&layout, "\u{2022} Topic 23");
    assert_eq!((page, moved.y), (1, 20.0));
}

#[test]
fn wrapped_only_policy_never_breaks_fixed_lines() {
    let mut plan = bare_plan();
    plan.sub_topics = (1..=30).map(|i| format!("Topic {i}")).collect();
    let styles = LayoutStyles::default().with_page_break_policy(PageBreakPolicy::WrappedOnly);

    let layout = layout_lesson_plan(&plan, &styles);

    let bullet_pages: Vec<usize> = layout
        .lines()
        .filter(|(_, line)| line.kind == LineKind::Bullet)
        .map(|(page, _)| page)
        .collect();
    assert_eq!(bullet_pages, vec![0; 30]);

    // The first wrapped outline line is past the threshold and moves.
    let (page, intro) = find(&layout, "intro");
    assert_eq!((page, intro.y), (1, 20.0));
}
