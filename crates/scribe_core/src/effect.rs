use crate::{GenerationRequest, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the fetch-then-generate pipeline for one submission.
    RunGeneration {
        submission_id: SubmissionId,
        request: GenerationRequest,
    },
    /// Write the latest result to `<file_stem>_script.txt`.
    SaveTranscript { file_stem: String, payload: String },
}
