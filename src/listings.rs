//! Job listing generation for the marketplace board.
//!
//! Provides [`ListingGenerator`] which fills the board with freelance job
//! listings. When a Gemini client is available it asks the model for a batch
//! tailored to the worker's career level; otherwise it falls back to a
//! deterministic built-in board.

use crate::gemini::{ContentGenerator, GeminiError, GenerateContentRequest};
use crate::market::{Difficulty, Job, Rupiah};

/// Lowest and highest rewards the board should offer, in IDR.
const REWARD_FLOOR: Rupiah = 50_000;
const REWARD_CEILING: Rupiah = 1_000_000;

/// Fills the job board with generated listings.
pub struct ListingGenerator;

/// Raw LLM response item used for JSON deserialization. Ids and statuses in
/// the model output are ignored; jobs get fresh ids on construction.
#[derive(Debug, serde::Deserialize)]
struct LlmJobListing {
    title: String,
    description: String,
    reward: f64,
    difficulty: String,
    category: String,
}

impl ListingGenerator {
    /// Requests `count` job listings from the model, tailored to the given
    /// career level.
    ///
    /// A response that is not a valid JSON array yields an empty board
    /// rather than an error; individually invalid entries are skipped.
    /// Transport failures propagate to the caller.
    pub async fn generate_with_llm(
        client: &impl ContentGenerator,
        model: &str,
        level: u32,
        count: usize,
    ) -> Result<Vec<Job>, GeminiError> {
        let req = GenerateContentRequest::json_prompt(format!(
            "Generate {count} realistic freelance job listings for a digital marketplace. \
             Respond with ONLY a valid JSON array, no other text.\n\
             \n\
             Format:\n\
             [{{\"title\": \"<short job title>\", \"description\": \"<one or two sentences>\", \
             \"reward\": <number>, \"difficulty\": \"<Easy|Medium|Hard>\", \"category\": \"<category>\"}}]\n\
             \n\
             Rules:\n\
             - Difficulty should be appropriate for experience level {level}\n\
             - Include a variety of categories like Programming, Design, Writing, and Data Analysis\n\
             - Rewards are in Indonesian Rupiah (IDR) ranging from {REWARD_FLOOR} to {REWARD_CEILING} based on difficulty"
        ));

        let response = client.generate_content(model, &req).await?;
        let text = response.text().unwrap_or_default().trim().to_string();

        let parsed: Vec<LlmJobListing> = match serde_json::from_str(&text) {
            Ok(listings) => listings,
            Err(_) => return Ok(Vec::new()),
        };

        let jobs = parsed
            .into_iter()
            .filter(|raw| !raw.title.trim().is_empty() && raw.reward >= 1.0)
            .map(|raw| {
                Job::generated(
                    raw.title,
                    raw.description,
                    (raw.reward.round() as Rupiah).clamp(1, REWARD_CEILING),
                    parse_difficulty(&raw.difficulty),
                    raw.category,
                )
            })
            .collect();

        Ok(jobs)
    }

    /// Built-in board used when no API client is configured. Rewards scale
    /// up 25% per career level, capped at the board ceiling.
    pub fn fallback_listings(level: u32) -> Vec<Job> {
        const BOARD: &[(&str, &str, Rupiah, Difficulty, &str)] = &[
            (
                "Tidy up a sales spreadsheet",
                "Clean and normalize a month of sales records in a shared spreadsheet.",
                50_000,
                Difficulty::Easy,
                "Data Analysis",
            ),
            (
                "Write five product descriptions",
                "Write short, punchy descriptions for five new catalog items.",
                100_000,
                Difficulty::Easy,
                "Writing",
            ),
            (
                "Design a promo banner",
                "Design a web banner for a weekend flash sale.",
                200_000,
                Difficulty::Medium,
                "Design",
            ),
            (
                "Fix a broken landing page layout",
                "The hero section collapses on mobile; find and fix the CSS issue.",
                300_000,
                Difficulty::Medium,
                "Programming",
            ),
            (
                "Build a small reporting endpoint",
                "Add a JSON endpoint that aggregates daily order totals.",
                500_000,
                Difficulty::Hard,
                "Programming",
            ),
        ];

        let scale = 100 + 25 * i64::from(level.saturating_sub(1));
        BOARD
            .iter()
            .map(|&(title, description, reward, difficulty, category)| {
                Job::generated(
                    title.to_string(),
                    description.to_string(),
                    (reward * scale / 100).min(REWARD_CEILING),
                    difficulty,
                    category.to_string(),
                )
            })
            .collect()
    }
}

/// Parses a difficulty string from LLM output, defaulting to Medium.
fn parse_difficulty(s: &str) -> Difficulty {
    match s.to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::types::{Candidate, Content, GenerateContentResponse, Part};
    use crate::market::{Employer, JobStatus};

    // --- parse_difficulty tests ---

    #[test]
    fn parse_difficulty_easy() {
        assert_eq!(parse_difficulty("Easy"), Difficulty::Easy);
        assert_eq!(parse_difficulty("EASY"), Difficulty::Easy);
    }

    #[test]
    fn parse_difficulty_hard() {
        assert_eq!(parse_difficulty("hard"), Difficulty::Hard);
    }

    #[test]
    fn parse_difficulty_default() {
        assert_eq!(parse_difficulty("Medium"), Difficulty::Medium);
        assert_eq!(parse_difficulty("anything"), Difficulty::Medium);
    }

    // --- fallback board tests ---

    #[test]
    fn fallback_board_has_five_listings() {
        let jobs = ListingGenerator::fallback_listings(1);
        assert_eq!(jobs.len(), 5);
        assert!(jobs.iter().all(|j| j.employer == Employer::System));
        assert!(jobs.iter().all(|j| j.status == JobStatus::Open));
        assert_eq!(jobs[0].reward, 50_000);
    }

    #[test]
    fn fallback_rewards_scale_with_level() {
        let level_one = ListingGenerator::fallback_listings(1);
        let level_three = ListingGenerator::fallback_listings(3);
        assert_eq!(level_one[0].reward, 50_000);
        assert_eq!(level_three[0].reward, 75_000);
        assert_eq!(level_three[4].reward, 750_000);
    }

    #[test]
    fn fallback_rewards_cap_at_ceiling() {
        let jobs = ListingGenerator::fallback_listings(20);
        assert!(jobs.iter().all(|j| j.reward <= REWARD_CEILING));
        assert_eq!(jobs[4].reward, REWARD_CEILING);
    }

    // --- generate_with_llm tests (MockClient) ---

    struct MockClient {
        result: Result<String, GeminiError>,
    }

    impl MockClient {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
            }
        }

        fn err() -> Self {
            Self {
                result: Err(GeminiError::Api {
                    status: 500,
                    message: "mock error".to_string(),
                }),
            }
        }
    }

    impl ContentGenerator for MockClient {
        async fn generate_content(
            &self,
            _model: &str,
            _req: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GeminiError> {
            match &self.result {
                Ok(text) => Ok(GenerateContentResponse {
                    candidates: vec![Candidate {
                        content: Content {
                            role: Some("model".to_string()),
                            parts: vec![Part { text: text.clone() }],
                        },
                        finish_reason: Some("STOP".to_string()),
                    }],
                    model_version: None,
                }),
                Err(_) => Err(GeminiError::Api {
                    status: 500,
                    message: "mock error".to_string(),
                }),
            }
        }
    }

    const MODEL: &str = "gemini-3-flash-preview";

    #[tokio::test]
    async fn llm_generates_listings() {
        let json = r#"[
            {"id": "1", "title": "Translate a brochure", "description": "Translate an 8-page brochure to English", "reward": 250000, "difficulty": "Medium", "category": "Writing", "status": "OPEN"},
            {"id": "2", "title": "Label a dataset", "description": "Label 500 images", "reward": 120000.0, "difficulty": "Easy", "category": "Data Analysis", "status": "OPEN"}
        ]"#;
        let client = MockClient::ok(json);
        let jobs = ListingGenerator::generate_with_llm(&client, MODEL, 2, 5)
            .await
            .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Translate a brochure");
        assert_eq!(jobs[0].reward, 250_000);
        assert_eq!(jobs[0].difficulty, Difficulty::Medium);
        assert_eq!(jobs[0].employer, Employer::System);
        assert_eq!(jobs[0].location.as_deref(), Some("Remote"));
        assert_eq!(jobs[1].reward, 120_000);
        assert_ne!(jobs[0].id, jobs[1].id);
    }

    #[tokio::test]
    async fn llm_malformed_response_yields_empty_board() {
        let client = MockClient::ok("sorry, I cannot generate jobs right now");
        let jobs = ListingGenerator::generate_with_llm(&client, MODEL, 1, 5)
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn llm_skips_invalid_entries() {
        let json = r#"[
            {"title": "", "description": "no title", "reward": 100000, "difficulty": "Easy", "category": "Writing"},
            {"title": "Free work", "description": "zero reward", "reward": 0, "difficulty": "Easy", "category": "Writing"},
            {"title": "Valid gig", "description": "ok", "reward": 80000, "difficulty": "Odd", "category": "Design"}
        ]"#;
        let client = MockClient::ok(json);
        let jobs = ListingGenerator::generate_with_llm(&client, MODEL, 1, 3)
            .await
            .unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Valid gig");
        // Unknown difficulty falls back to Medium.
        assert_eq!(jobs[0].difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn llm_transport_error_propagates() {
        let client = MockClient::err();
        let result = ListingGenerator::generate_with_llm(&client, MODEL, 1, 5).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn llm_rewards_clamped_to_ceiling() {
        let json = r#"[
            {"title": "Too generous", "description": "d", "reward": 9000000, "difficulty": "Hard", "category": "Programming"}
        ]"#;
        let client = MockClient::ok(json);
        let jobs = ListingGenerator::generate_with_llm(&client, MODEL, 1, 1)
            .await
            .unwrap();
        assert_eq!(jobs[0].reward, REWARD_CEILING);
    }
}
