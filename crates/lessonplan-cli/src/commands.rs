use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::info;

use lessonplan_core::models::LessonPlan;
use lessonplan_gemini::generator::TextGenerator;
use lessonplan_gemini::prompt::build_lesson_prompt;

use crate::config::{self, LessonPlanConfig};
use crate::form::{GenerationOutcome, LessonForm, Notification, Severity};

fn read_plan(path: &Path) -> Result<LessonPlan> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read plan at {}", path.display()))?;
    LessonPlan::from_json(&contents)
        .wrap_err_with(|| format!("failed to parse plan at {}", path.display()))
}

fn write_plan(path: &Path, plan: &LessonPlan) -> Result<()> {
    let json = plan.to_json_pretty()?;
    std::fs::write(path, json)
        .wrap_err_with(|| format!("failed to write plan to {}", path.display()))?;
    info!(path = %path.display(), "plan written");
    Ok(())
}

/// Print notifications to stderr, failing if any of them is an error.
pub fn report(notifications: Vec<Notification>) -> Result<()> {
    let mut failure = None;
    for n in notifications {
        eprintln!("{}: {}", n.title, n.description);
        if n.severity == Severity::Error {
            failure = Some(n.description);
        }
    }
    match failure {
        Some(description) => Err(eyre::eyre!(description)),
        None => Ok(()),
    }
}

pub fn sample(output: Option<&Path>) -> Result<()> {
    let plan = LessonPlan::sample();
    match output {
        Some(path) => write_plan(path, &plan),
        None => {
            println!("{}", plan.to_json_pretty()?);
            Ok(())
        }
    }
}

pub fn prompt(plan_path: &Path) -> Result<()> {
    let plan = read_plan(plan_path)?;
    println!("{}", build_lesson_prompt(&plan));
    Ok(())
}

pub async fn generate(
    config: &LessonPlanConfig,
    plan_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    generate_with(&config.client(), plan_path, output).await
}

/// Generate with any backend. The plan file is only rewritten when the
/// reply was applied.
pub async fn generate_with<G: TextGenerator + ?Sized>(
    generator: &G,
    plan_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let mut form = LessonForm::new(read_plan(plan_path)?);

    let outcome = form.generate_with(generator).await?;
    let notifications = form.drain_notifications();

    if outcome == GenerationOutcome::Applied {
        write_plan(output.unwrap_or(plan_path), &form.into_draft())?;
    }
    report(notifications)
}

pub fn export(
    config: &LessonPlanConfig,
    plan_path: &Path,
    out_dir: Option<&Path>,
    data_uri: bool,
) -> Result<()> {
    let stdout = std::io::stdout();
    export_to(&mut stdout.lock(), config, plan_path, out_dir, data_uri)
}

/// Export a plan, printing the data URI or the written PDF path to `out`.
pub fn export_to<W: Write>(
    out: &mut W,
    config: &LessonPlanConfig,
    plan_path: &Path,
    out_dir: Option<&Path>,
    data_uri: bool,
) -> Result<()> {
    let mut form = LessonForm::new(read_plan(plan_path)?).with_styles(config.styles());
    let document = form.submit();
    let notifications = form.drain_notifications();

    if let Some(document) = document {
        if data_uri {
            writeln!(out, "{}", document.to_data_uri())?;
        } else {
            let dir = out_dir.unwrap_or(config.output_dir.as_path());
            std::fs::create_dir_all(dir)?;
            let path = dir.join(&document.filename);
            std::fs::write(&path, &document.bytes)
                .wrap_err_with(|| format!("failed to write PDF to {}", path.display()))?;
            writeln!(out, "{}", path.display())?;
        }
    }
    report(notifications)
}

pub fn config_show(config: &LessonPlanConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn config_init(path: &Path) -> Result<()> {
    config::save_config(path, &LessonPlanConfig::default())?;
    println!("{}", path.display());
    Ok(())
}

/// Resolve the config file location: explicit flag or the platform default.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => config::config_path(),
    }
}
