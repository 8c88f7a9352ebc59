use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API key is not configured ({source_name})")]
    MissingCredential { source_name: String },

    #[error("Gemini API request failed: {0}")]
    Request(String),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Gemini API returned no text in the response candidates")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl GenerationError {
    /// Whether the failure was detected before any network attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::MissingCredential { .. })
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        // Error text is logged; keep the request URL out of it.
        GenerationError::Request(e.without_url().to_string())
    }
}
