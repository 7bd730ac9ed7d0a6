use std::time::Duration;

use scribe_core::Language;
use scribe_logging::{scribe_info, scribe_warn};
use serde::Deserialize;

/// How many leading paragraphs of the page summary are kept as
/// background context for the script prompt.
pub const SUMMARY_PARAGRAPH_LIMIT: usize = 3;

/// Outcome of a background-research fetch. Failure is represented as
/// content, never a raised fault; callers bind the text into the script
/// prompt either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Truncated excerpt of the page summary.
    Found(String),
    /// The page does not exist for this exact title.
    NotFound,
    /// Transport or decoding fault, with the underlying reason.
    FetchFailed(String),
}

impl SummaryOutcome {
    /// Converts the outcome to the text bound into the script prompt
    /// (and shown to the user). This is the only place the tagged
    /// result collapses back into plain content.
    pub fn display_text(&self, topic: &str) -> String {
        match self {
            SummaryOutcome::Found(text) => text.clone(),
            SummaryOutcome::NotFound => format!(
                "No information found for '{topic}'. The topic might be too specific or misspelled."
            ),
            SummaryOutcome::FetchFailed(_) => format!(
                "An error occurred while fetching information for '{topic}'. Please check your connection or the topic."
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WikiSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Replaces the `https://<code>.wikipedia.org` origin, for tests.
    pub endpoint_override: Option<String>,
    pub user_agent: String,
}

impl Default for WikiSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            endpoint_override: None,
            user_agent: "Scribecast/0.1".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait SummarySource: Send + Sync {
    async fn fetch_summary(&self, topic: &str, language: Language) -> SummaryOutcome;
}

/// Fetches page summaries from the Wikipedia REST API, one edition per
/// language. Resolves the topic as an exact title, no fuzzy search.
#[derive(Debug, Clone)]
pub struct WikiClient {
    settings: WikiSettings,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: String,
}

impl WikiClient {
    pub fn new(settings: WikiSettings) -> Self {
        Self { settings }
    }

    fn summary_url(&self, topic: &str, language: Language) -> String {
        let origin = match &self.settings.endpoint_override {
            Some(origin) => origin.trim_end_matches('/').to_string(),
            None => format!("https://{}.wikipedia.org", language.wiki_code()),
        };
        // The REST API expects underscores where the title has spaces.
        let title = topic.replace(' ', "_");
        format!("{origin}/api/rest_v1/page/summary/{title}")
    }

    fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .user_agent(self.settings.user_agent.clone())
            .build()
    }
}

#[async_trait::async_trait]
impl SummarySource for WikiClient {
    async fn fetch_summary(&self, topic: &str, language: Language) -> SummaryOutcome {
        let url = self.summary_url(topic, language);
        let client = match self.build_client() {
            Ok(client) => client,
            Err(err) => {
                scribe_warn!("wiki client build failed: {err}");
                return SummaryOutcome::FetchFailed(err.to_string());
            }
        };

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                scribe_warn!("wiki fetch for '{topic}' failed: {err}");
                return SummaryOutcome::FetchFailed(err.to_string());
            }
        };

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            scribe_warn!("no wiki page for topic '{topic}' ({})", language.wiki_code());
            return SummaryOutcome::NotFound;
        }
        if !status.is_success() {
            scribe_warn!("wiki fetch for '{topic}' returned {status}");
            return SummaryOutcome::FetchFailed(status.to_string());
        }

        match response.json::<PageSummary>().await {
            Ok(page) => {
                scribe_info!("fetched wiki summary for '{topic}' ({})", language.wiki_code());
                SummaryOutcome::Found(truncate_paragraphs(&page.extract))
            }
            Err(err) => {
                scribe_warn!("wiki summary for '{topic}' was undecodable: {err}");
                SummaryOutcome::FetchFailed(err.to_string())
            }
        }
    }
}

/// Keeps the first [`SUMMARY_PARAGRAPH_LIMIT`] paragraphs. Paragraph
/// boundaries are whatever line breaks the source uses, not re-derived.
fn truncate_paragraphs(summary: &str) -> String {
    summary
        .split('\n')
        .take(SUMMARY_PARAGRAPH_LIMIT)
        .collect::<Vec<_>>()
        .join("\n")
}
