use crate::{GenerationRequest, Language, ScriptLength, Tone};

pub type SubmissionId = u64;

/// Title plus full script text, exactly as returned by the generation
/// pipeline. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub title: String,
    pub script: String,
}

/// Observable session phases. `Generating` is transient presentation
/// state; the durable states are `Empty` and `Populated`, and there is
/// no transition back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Empty,
    Generating,
    Populated,
}

/// Session-scoped state: user-editable request fields plus the
/// most-recent-first history of results. Created at session start,
/// discarded at session end, mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    topic_input: String,
    tone: Tone,
    length: ScriptLength,
    language: Language,
    history: Vec<GenerationResult>,
    pending: Option<SubmissionId>,
    next_submission_id: SubmissionId,
    last_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic_input(&self) -> &str {
        &self.topic_input
    }

    pub fn history(&self) -> &[GenerationResult] {
        &self.history
    }

    pub fn pending(&self) -> Option<SubmissionId> {
        self.pending
    }

    pub fn phase(&self) -> SessionPhase {
        if self.pending.is_some() {
            SessionPhase::Generating
        } else if self.history.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Populated
        }
    }

    pub(crate) fn set_topic_input(&mut self, topic: String) {
        self.topic_input = topic;
    }

    pub(crate) fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub(crate) fn set_length(&mut self, length: ScriptLength) {
        self.length = length;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Starts a submission for the current field values. Returns `None`
    /// when the trimmed topic is empty or another submission is already
    /// in flight.
    pub(crate) fn begin_submission(&mut self) -> Option<(SubmissionId, GenerationRequest)> {
        let topic = self.topic_input.trim();
        if topic.is_empty() || self.pending.is_some() {
            return None;
        }
        self.next_submission_id += 1;
        let submission_id = self.next_submission_id;
        self.pending = Some(submission_id);
        self.last_error = None;
        let request = GenerationRequest {
            topic: topic.to_string(),
            tone: self.tone,
            length: self.length,
            language: self.language,
        };
        Some((submission_id, request))
    }

    /// Records a finished submission. Success prepends to history;
    /// failure leaves history untouched and records the error notice.
    pub(crate) fn finish_submission(
        &mut self,
        submission_id: SubmissionId,
        result: Result<GenerationResult, String>,
    ) {
        if self.pending != Some(submission_id) {
            return;
        }
        self.pending = None;
        match result {
            Ok(generated) => {
                self.last_error = None;
                self.history.insert(0, generated);
            }
            Err(message) => {
                self.last_error = Some(message);
            }
        }
    }

    pub(crate) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn tone(&self) -> Tone {
        self.tone
    }

    pub(crate) fn length(&self) -> ScriptLength {
        self.length
    }

    pub(crate) fn language(&self) -> Language {
        self.language
    }
}
