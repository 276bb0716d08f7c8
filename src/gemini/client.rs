use std::time::Duration;

use reqwest::Client;

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The seam between marketplace logic and the Gemini API. Implemented by
/// [`GeminiClient`] for real calls and by mocks in tests.
#[allow(async_fn_in_trait)]
pub trait ContentGenerator {
    async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;
}

pub struct GeminiClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, API_BASE.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            client,
            base_url,
        }
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(req)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(1000);
            return Err(GeminiError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<GenerateContentResponse>().await?;
        Ok(body)
    }
}
