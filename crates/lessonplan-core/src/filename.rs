//! Download filename convention for exported plans.

/// Used when the topic contains nothing usable.
pub const DEFAULT_STEM: &str = "lesson_plan";

/// Derive the `.pdf` filename for a plan from its topic.
///
/// Each whitespace-separated word keeps only its ASCII letters and digits;
/// surviving words are joined with `_` and lower-cased.
///
/// ```
/// use lessonplan_core::filename::export_filename;
///
/// assert_eq!(
///     export_filename("Photosynthesis: Nature's Solar Power"),
///     "photosynthesis_natures_solar_power.pdf"
/// );
/// assert_eq!(export_filename(""), "lesson_plan.pdf");
/// ```
pub fn export_filename(topic: &str) -> String {
    let stem = topic
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        format!("{DEFAULT_STEM}.pdf")
    } else {
        format!("{stem}.pdf")
    }
}
