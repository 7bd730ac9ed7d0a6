use std::path::PathBuf;

use scribe_core::{Effect, Msg};
use scribe_engine::{EngineConfig, EngineEvent, EngineHandle};
use scribe_logging::{scribe_info, scribe_warn};

/// Bridges core effects to the engine and engine events back to
/// messages. A submission is driven to completion before `run` returns,
/// so the session processes one submission at a time.
pub struct EffectRunner {
    engine: EngineHandle,
    output_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, output_dir: PathBuf) -> Self {
        Self {
            engine: EngineHandle::new(config),
            output_dir,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::RunGeneration {
                    submission_id,
                    request,
                } => {
                    scribe_info!(
                        "submission {} topic='{}' tone={:?} length={:?} language={:?}",
                        submission_id,
                        request.topic,
                        request.tone,
                        request.length,
                        request.language
                    );
                    println!("Generating your script... This might take a moment.");
                    self.engine.generate(submission_id, request);
                    follow_ups.extend(self.wait_for_completion(submission_id));
                }
                Effect::SaveTranscript { file_stem, payload } => {
                    self.save_transcript(&file_stem, &payload);
                }
            }
        }
        follow_ups
    }

    /// Drains engine events until the submission completes. The summary
    /// event is observability only; generation proceeds either way.
    fn wait_for_completion(&self, submission_id: scribe_core::SubmissionId) -> Option<Msg> {
        while let Some(event) = self.engine.recv() {
            match event {
                EngineEvent::SummaryFetched { outcome, .. } => {
                    scribe_info!("summary outcome: {outcome:?}");
                }
                EngineEvent::GenerationCompleted {
                    submission_id: done_id,
                    result,
                } if done_id == submission_id => {
                    return Some(Msg::GenerationFinished {
                        submission_id,
                        result: result.map_err(|err| err.to_string()),
                    });
                }
                EngineEvent::GenerationCompleted { submission_id, .. } => {
                    scribe_warn!("dropping completion for stale submission {submission_id}");
                }
            }
        }
        scribe_warn!("engine thread went away mid-submission");
        None
    }

    fn save_transcript(&self, file_stem: &str, payload: &str) {
        let path = self.output_dir.join(format!("{file_stem}_script.txt"));
        match std::fs::write(&path, payload) {
            Ok(()) => println!("Saved script to {}", path.display()),
            Err(err) => {
                scribe_warn!("could not write {}: {err}", path.display());
                println!("Could not save the script: {err}");
            }
        }
    }
}
