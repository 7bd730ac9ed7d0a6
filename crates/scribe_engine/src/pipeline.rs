use scribe_core::{GenerationRequest, GenerationResult};
use scribe_logging::scribe_info;

use crate::gemini::TextGenerator;
use crate::prompts::{script_prompt, title_prompt};
use crate::types::GenerateError;

/// Runs the two-stage generation pipeline: titles first, then a script
/// built around the chosen title. Faults from either stage propagate to
/// the caller; there is nothing useful to fall back to here.
pub async fn generate_content(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    summary: &str,
) -> Result<GenerationResult, GenerateError> {
    let titles = generator
        .generate_text(&title_prompt(&request.topic, request.language))
        .await?;

    // Line 0 of the response, taken as-is. The model is asked for one
    // title per line but nothing checks that it complied.
    let first_title = titles.split('\n').next().unwrap_or_default().to_string();
    scribe_info!("title stage chose: {first_title}");

    let script = generator
        .generate_text(&script_prompt(
            &first_title,
            summary,
            request.tone,
            request.length,
            request.language,
        ))
        .await?;

    Ok(GenerationResult {
        title: first_title,
        script,
    })
}
