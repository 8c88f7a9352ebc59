//! Smoke test for the full draft → generate → export flow.
//!
//! Starts from the sample plan, asks Gemini for content, and writes the PDF
//! to the current directory.
//!
//! Usage:
//!   GEMINI_API_KEY=... \
//!   GEMINI_MODEL=gemini-2.5-flash \
//!   cargo run -p lessonplan-cli --example generate_smoke

use lessonplan_cli::form::{GenerationOutcome, LessonForm};
use lessonplan_gemini::client::{Credential, GeminiClient, DEFAULT_MODEL};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let client = GeminiClient::new(Credential::default()).with_model(model);

    let mut form = LessonForm::default();

    println!("=== Generating ===");
    let outcome = form.generate_with(&client).await?;
    for n in form.drain_notifications() {
        println!("  {}: {}", n.title, n.description);
    }
    if outcome != GenerationOutcome::Applied {
        return Err(eyre::eyre!("generation did not complete: {outcome:?}"));
    }

    let content = form.draft().ai_content().unwrap_or_default();
    println!("  {} characters of AI content", content.len());

    println!("\n=== Exporting ===");
    let document = form
        .submit()
        .ok_or_else(|| eyre::eyre!("export failed"))?;
    std::fs::write(&document.filename, &document.bytes)?;
    println!("  wrote {} ({} pages)", document.filename, document.page_count);

    Ok(())
}
