mod effects;
mod render;
mod repl;

use anyhow::Context;
use scribe_engine::{EngineConfig, GeminiSettings};
use scribe_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    let destination = match std::env::var("SCRIBECAST_LOG").ok().as_deref() {
        Some("file") => LogDestination::File,
        Some("both") => LogDestination::Both,
        _ => LogDestination::Terminal,
    };
    scribe_logging::initialize(destination);

    // The generation service credential is required up front; without it
    // there is nothing useful this process can do.
    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY is not set; export it before starting scribe_app")?;

    let output_dir = std::env::current_dir().context("cannot resolve working directory")?;
    repl::run(EngineConfig::new(GeminiSettings::new(api_key)), output_dir)
}
