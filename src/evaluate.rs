//! AI evaluation of submitted deliverables for system jobs.

use crate::gemini::{ContentGenerator, GeminiError, GenerateContentRequest};
use crate::market::{Evaluation, Job};

/// Asks the model for a pass/fail judgment on a submitted deliverable.
///
/// Transport failures propagate unchanged; a response that is not the
/// expected `{success, feedback}` JSON object is a [`GeminiError::Parse`].
pub async fn evaluate_submission(
    client: &impl ContentGenerator,
    model: &str,
    job: &Job,
    submission: &str,
) -> Result<Evaluation, GeminiError> {
    let req = GenerateContentRequest::json_prompt(format!(
        "Evaluate the following submission for the job: \"{}\".\n\
         Job Description: {}\n\
         Submission: {}\n\
         \n\
         Respond with ONLY valid JSON, no other text.\n\
         Format: {{\"success\": <boolean>, \"feedback\": \"<short feedback string>\"}}",
        job.title, job.description, submission
    ));

    let response = client.generate_content(model, &req).await?;
    let text = response.text().unwrap_or_default().trim().to_string();

    serde_json::from_str(&text)
        .map_err(|e| GeminiError::Parse(format!("evaluation response: {e}")))
}
