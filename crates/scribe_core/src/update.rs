use crate::{download_payload, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TopicChanged(topic) => {
            state.set_topic_input(topic);
            Vec::new()
        }
        Msg::ToneSelected(tone) => {
            state.set_tone(tone);
            Vec::new()
        }
        Msg::LengthSelected(length) => {
            state.set_length(length);
            Vec::new()
        }
        Msg::LanguageSelected(language) => {
            state.set_language(language);
            Vec::new()
        }
        Msg::Submitted => match state.begin_submission() {
            Some((submission_id, request)) => vec![Effect::RunGeneration {
                submission_id,
                request,
            }],
            // Blank topic or a submission already in flight.
            None => Vec::new(),
        },
        Msg::GenerationFinished {
            submission_id,
            result,
        } => {
            state.finish_submission(submission_id, result);
            Vec::new()
        }
        Msg::SaveRequested => match state.history().first() {
            Some(latest) => {
                let trimmed = state.topic_input().trim();
                let file_stem = if trimmed.is_empty() {
                    "script".to_string()
                } else {
                    trimmed.to_string()
                };
                vec![Effect::SaveTranscript {
                    file_stem,
                    payload: download_payload(latest),
                }]
            }
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
