//! Scribecast core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use request::{GenerationRequest, Language, ScriptLength, Tone};
pub use state::{AppState, GenerationResult, SessionPhase, SubmissionId};
pub use update::update;
pub use view_model::{
    download_payload, AppViewModel, HistoryRowView, ResultView, HISTORY_SNIPPET_CHARS,
};
