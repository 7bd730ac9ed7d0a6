//! Scribecast engine: IO pipeline and effect execution.
mod engine;
mod gemini;
mod pipeline;
mod prompts;
mod types;
mod wiki;

pub use engine::{EngineConfig, EngineHandle};
pub use gemini::{
    GeminiClient, GeminiSettings, TextGenerator, DEFAULT_MODEL, GENERATION_TEMPERATURE,
};
pub use pipeline::generate_content;
pub use prompts::{script_prompt, title_prompt};
pub use types::{EngineEvent, GenerateError, GenerateFailure};
pub use wiki::{SummaryOutcome, SummarySource, WikiClient, WikiSettings, SUMMARY_PARAGRAPH_LIMIT};
