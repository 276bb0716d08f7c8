use crate::config::KarirConfig;
use crate::error::MarketError;
use crate::evaluate::evaluate_submission;
use crate::gemini::GeminiClient;
use crate::listings::ListingGenerator;
use crate::market::{Evaluation, MarketSession, SubmissionOutcome};

/// Drives the marketplace session: applies user-triggered transitions and
/// runs the Gemini rounds (listing generation, submission evaluation).
///
/// With no client configured the marketplace runs offline: the built-in
/// job board replaces generation and submissions are auto-approved.
pub struct Marketplace {
    pub session: MarketSession,
    /// Optional Gemini client for real API calls.
    pub client: Option<GeminiClient>,
    config: KarirConfig,
}

impl Marketplace {
    pub fn new(session: MarketSession, client: Option<GeminiClient>, config: KarirConfig) -> Self {
        Self {
            session,
            client,
            config,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    /// Refreshes the job board with listings tailored to the current career
    /// level. Returns how many listings the new batch carries.
    ///
    /// On a transport failure the board is left untouched.
    pub async fn refresh_listings(&mut self) -> Result<usize, MarketError> {
        let level = self.session.user().career_level;
        let listings = match &self.client {
            Some(client) => {
                ListingGenerator::generate_with_llm(
                    client,
                    &self.config.model,
                    level,
                    self.config.job_batch_size,
                )
                .await?
            }
            None => ListingGenerator::fallback_listings(level),
        };
        let count = listings.len();
        self.session.sync_system_listings(listings);
        Ok(count)
    }

    /// Submits the deliverable for the worker's active job. System jobs go
    /// through an evaluation round; custom jobs wait for the employer.
    ///
    /// If the evaluation call fails the job stays SUBMITTED and the error
    /// propagates; nothing is rolled back.
    pub async fn submit_active(&mut self, text: &str) -> Result<SubmissionOutcome, MarketError> {
        let pending = self.session.submit(text)?;
        if !pending.job.employer.is_system() {
            return Ok(SubmissionOutcome::AwaitingReview);
        }

        let evaluation = match &self.client {
            Some(client) => {
                evaluate_submission(client, &self.config.model, &pending.job, text).await?
            }
            // Offline mode: no evaluator available, pass the submission.
            None => Evaluation {
                success: true,
                feedback: "Auto-approved (offline mode)".to_string(),
            },
        };

        self.session.apply_evaluation(pending.job.id, evaluation)
    }
}
