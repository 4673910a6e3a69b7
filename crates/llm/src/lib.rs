use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Errors from one model round trip. `MissingCredential` is a deployment
/// defect and is the only variant callers are expected to propagate; the
/// rest are transient runtime conditions.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("missing GEMINI_API_KEY credential")]
    MissingCredential,
    #[error("failed to reach model endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("model response contained no text candidates")]
    EmptyResponse,
}

/// Seam for the generative model, so extraction and chat can be tested
/// against a stub instead of a live endpoint.
pub trait TextModel {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}

/// Client for a Gemini-style `generateContent` endpoint. Constructed once
/// and cloned into every component that needs it; the credential comes from
/// the environment unless supplied explicitly.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Default endpoint and model, credential from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MODEL.to_string(),
            std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
        )
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(LlmError::Status(response.status()));
        }

        let body: GenerateResponse = response.json().await?;

        let text: String = body
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(text)
    }
}
