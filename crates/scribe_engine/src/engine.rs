use std::sync::mpsc;
use std::thread;

use scribe_core::{GenerationRequest, SubmissionId};

use crate::gemini::{GeminiClient, GeminiSettings, TextGenerator};
use crate::pipeline::generate_content;
use crate::types::EngineEvent;
use crate::wiki::{SummarySource, WikiClient, WikiSettings};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub wiki: WikiSettings,
    pub gemini: GeminiSettings,
}

impl EngineConfig {
    pub fn new(gemini: GeminiSettings) -> Self {
        Self {
            wiki: WikiSettings::default(),
            gemini,
        }
    }
}

enum EngineCommand {
    Generate {
        submission_id: SubmissionId,
        request: GenerationRequest,
    },
}

/// Handle to the engine thread. Commands go in over one channel,
/// events come back over another. Commands run to completion one at a
/// time, so a submission's events always arrive before the next
/// submission starts.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let wiki = WikiClient::new(config.wiki);
            let gemini = GeminiClient::new(config.gemini);
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(&wiki, &gemini, command, &event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn generate(&self, submission_id: SubmissionId, request: GenerationRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            submission_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the engine emits the next event. Returns `None`
    /// only if the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    wiki: &dyn SummarySource,
    generator: &dyn TextGenerator,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate {
            submission_id,
            request,
        } => {
            let outcome = wiki.fetch_summary(&request.topic, request.language).await;
            let _ = event_tx.send(EngineEvent::SummaryFetched {
                submission_id,
                outcome: outcome.clone(),
            });

            let summary = outcome.display_text(&request.topic);
            let result = generate_content(generator, &request, &summary).await;
            let _ = event_tx.send(EngineEvent::GenerationCompleted {
                submission_id,
                result,
            });
        }
    }
}
