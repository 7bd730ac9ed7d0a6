use crate::{GenerationResult, Language, ScriptLength, SubmissionId, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the topic input field.
    TopicChanged(String),
    /// User picked a script tone.
    ToneSelected(Tone),
    /// User picked a target length bucket.
    LengthSelected(ScriptLength),
    /// User picked an output language.
    LanguageSelected(Language),
    /// User triggered the submit action for the current field values.
    Submitted,
    /// Engine finished a submission, successfully or not. The error arm
    /// carries the fault's string form, shown as a single generic notice.
    GenerationFinished {
        submission_id: SubmissionId,
        result: Result<GenerationResult, String>,
    },
    /// User asked to save the latest result as a text file.
    SaveRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
