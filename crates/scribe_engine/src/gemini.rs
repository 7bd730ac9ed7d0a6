use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{GenerateError, GenerateFailure};

/// Fixed model identifier for both generation stages.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Fixed sampling temperature, a moderate creative setting.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    /// Origin of the generative-language API, overridable for tests.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// One request/response cycle against the text-generation service.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// reqwest client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: GeminiSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Self {
        Self { settings }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerateError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| GenerateError::new(GenerateFailure::Transport, err.to_string()))
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        };

        let client = self.build_client()?;
        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let kind = match status.as_u16() {
                401 | 403 => GenerateFailure::Auth,
                429 => GenerateFailure::Quota,
                code => GenerateFailure::HttpStatus(code),
            };
            let detail = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(GenerateError::new(kind, detail));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| {
                GenerateError::new(GenerateFailure::MalformedResponse, err.to_string())
            })?;

        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GenerateError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenerateError::new(
            GenerateFailure::MalformedResponse,
            "response carried no candidate text",
        ));
    }
    Ok(text)
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    GenerateError::new(GenerateFailure::Transport, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{extract_text, Candidate, Content, GenerateContentResponse, Part};
    use crate::types::GenerateFailure;

    fn response_with(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: text.to_string(),
                    }],
                }),
            }],
        }
    }

    #[test]
    fn extracts_first_candidate_text() {
        let text = extract_text(response_with("hello")).expect("text");
        assert_eq!(text, "hello");
    }

    #[test]
    fn empty_candidates_are_malformed() {
        let err = extract_text(GenerateContentResponse { candidates: vec![] }).unwrap_err();
        assert_eq!(err.kind, GenerateFailure::MalformedResponse);
    }

    #[test]
    fn candidate_without_content_is_malformed() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate { content: None }],
        };
        let err = extract_text(response).unwrap_err();
        assert_eq!(err.kind, GenerateFailure::MalformedResponse);
    }
}
