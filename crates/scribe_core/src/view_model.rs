use crate::{AppState, GenerationResult, Language, ScriptLength, SessionPhase, Tone};

/// How much of each older script is shown in the history listing.
pub const HISTORY_SNIPPET_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SessionPhase,
    pub topic_input: String,
    pub tone: Tone,
    pub length: ScriptLength,
    pub language: Language,
    /// Front-most history entry, rendered in full.
    pub latest: Option<ResultView>,
    /// Entries past the first, stored order (newest first), shown collapsed.
    pub history_rows: Vec<HistoryRowView>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub script: String,
    pub download_payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    /// 1-based position among the older entries.
    pub position: usize,
    pub title: String,
    pub snippet: String,
}

/// Downloadable text blob combining title and script.
pub fn download_payload(result: &GenerationResult) -> String {
    format!("Title: {}\n\n{}", result.title, result.script)
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let latest = self.history().first().map(|result| ResultView {
            title: result.title.clone(),
            script: result.script.clone(),
            download_payload: download_payload(result),
        });

        let history_rows = self
            .history()
            .iter()
            .skip(1)
            .enumerate()
            .map(|(index, result)| HistoryRowView {
                position: index + 1,
                title: result.title.clone(),
                snippet: snippet_of(&result.script),
            })
            .collect();

        AppViewModel {
            phase: self.phase(),
            topic_input: self.topic_input().to_string(),
            tone: self.tone(),
            length: self.length(),
            language: self.language(),
            latest,
            history_rows,
            last_error: self.last_error().map(ToOwned::to_owned),
        }
    }
}

fn snippet_of(script: &str) -> String {
    let head: String = script.chars().take(HISTORY_SNIPPET_CHARS).collect();
    format!("{head}...")
}
