use scribe_core::{GenerationResult, SubmissionId};
use thiserror::Error;

use crate::wiki::SummaryOutcome;

/// Why a generation stage failed. Auth and quota faults come back from
/// the service with distinct statuses, so callers can tell a bad key
/// from an exhausted one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateFailure {
    #[error("authentication rejected")]
    Auth,
    #[error("quota exhausted")]
    Quota,
    #[error("network transport failure")]
    Transport,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed model response")]
    MalformedResponse,
}

/// Failure from the text-generation service, propagated untouched
/// through the pipeline to the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GenerateError {
    pub kind: GenerateFailure,
    pub message: String,
}

impl GenerateError {
    pub(crate) fn new(kind: GenerateFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Events emitted by the engine thread back to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Background research finished for a submission. Informational;
    /// the pipeline proceeds regardless of the outcome.
    SummaryFetched {
        submission_id: SubmissionId,
        outcome: SummaryOutcome,
    },
    /// The two-stage pipeline finished for a submission.
    GenerationCompleted {
        submission_id: SubmissionId,
        result: Result<GenerationResult, GenerateError>,
    },
}
