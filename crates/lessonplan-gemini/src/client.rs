//! Direct REST client for the Gemini `generateContent` endpoint.
//!
//! One prompt goes out as a single user turn; the reply is the first text
//! part of the last returned candidate. The API key is resolved on every
//! call, so a missing key is reported before any request is built.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::generator::TextGenerator;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Header carrying the API key; the request URL stays free of secrets.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Read from the named environment variable at call time.
    Env(String),
    Inline(String),
}

impl Default for Credential {
    fn default() -> Self {
        Credential::Env(DEFAULT_API_KEY_ENV.to_string())
    }
}

impl Credential {
    /// Resolve the key, treating unset and blank values alike.
    pub fn resolve(&self) -> Result<String, GenerationError> {
        let value = match self {
            Credential::Env(var) => std::env::var(var).unwrap_or_default(),
            Credential::Inline(key) => key.clone(),
        };

        if value.trim().is_empty() {
            return Err(GenerationError::MissingCredential {
                source_name: self.describe(),
            });
        }
        Ok(value)
    }

    fn describe(&self) -> String {
        match self {
            Credential::Env(var) => format!("environment variable {var}"),
            Credential::Inline(_) => "inline key".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    credential: Credential,
    model: String,
    base_url: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(Credential::default())
    }
}

impl GeminiClient {
    pub fn new(credential: Credential) -> Self {
        Self {
            http: Client::new(),
            credential,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn send_request(
        &self,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let body_text = response.text().await?;
        parse_generate_response(&body_text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.credential.resolve()?;

        let request_id = Uuid::new_v4();
        info!(
            request_id = %request_id,
            model = %self.model,
            prompt_len = prompt.len(),
            "starting generation"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        match self.send_request(&api_key, &request).await {
            Ok(text) => {
                info!(request_id = %request_id, response_len = text.len(), "generation complete");
                Ok(text)
            }
            Err(e) => {
                error!(request_id = %request_id, error = %e, "generation failed");
                Err(e)
            }
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Extract the reply text from a successful `generateContent` body.
pub fn parse_generate_response(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::ResponseParse(e.to_string()))?;

    parsed
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GenerationError::EmptyResponse)
}

/// Turn a non-success response into an error, preferring the message from
/// Google's error envelope when the body carries one.
pub fn map_http_error(status: StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    GenerationError::Api {
        status: status.as_u16(),
        message,
    }
}
