//! Request and response types for the Gemini `generateContent` endpoint.
//!
//! All structs derive `Serialize` and `Deserialize` and use the camelCase
//! field names the `v1beta` API expects.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for one-shot prompts.
    pub contents: Vec<Content>,
    /// Optional generation settings, e.g. a JSON response MIME type.
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A one-shot prompt whose response is requested as strict JSON.
    pub fn json_prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: text.into() }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }),
        }
    }
}

/// One conversation turn: an optional role plus its text parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// A text fragment within a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation settings forwarded to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Set to `application/json` to request machine-parseable output.
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "modelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// A single generated answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Content,
    #[serde(rename = "finishReason", default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_prompt_sets_mime_type() {
        let req = GenerateContentRequest::json_prompt("Generate 5 jobs");
        assert_eq!(req.contents.len(), 1);
        assert_eq!(req.contents[0].role.as_deref(), Some("user"));
        assert_eq!(req.contents[0].parts[0].text, "Generate 5 jobs");
        assert_eq!(
            req.generation_config
                .as_ref()
                .unwrap()
                .response_mime_type
                .as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn request_serializes_camel_case_fields() {
        let req = GenerateContentRequest::json_prompt("hello");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""generationConfig""#));
        assert!(json.contains(r#""responseMimeType""#));
        assert!(!json.contains("generation_config"));
    }

    #[test]
    fn response_deserializes_from_api_format() {
        let api_json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "[]"}]},
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-3-flash-preview"
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(api_json).unwrap();
        assert_eq!(resp.text(), Some("[]"));
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn text_is_none_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(resp.text(), None);
    }

    #[test]
    fn response_roundtrip() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    role: Some("model".into()),
                    parts: vec![Part {
                        text: r#"{"success": true}"#.into(),
                    }],
                },
                finish_reason: Some("STOP".into()),
            }],
            model_version: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        let parsed: GenerateContentResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text(), Some(r#"{"success": true}"#));
    }
}
