use scribe_core::{
    update, AppState, Effect, GenerationResult, Msg, SessionPhase, HISTORY_SNIPPET_CHARS,
};

fn with_results(titles_and_scripts: &[(&str, &str)]) -> AppState {
    let mut state = AppState::new();
    for (title, script) in titles_and_scripts {
        let (next, _) = update(state, Msg::TopicChanged(title.to_string()));
        let (next, effects) = update(next, Msg::Submitted);
        state = next;
        let submission_id = match effects.first() {
            Some(Effect::RunGeneration { submission_id, .. }) => *submission_id,
            other => panic!("expected RunGeneration, got {other:?}"),
        };
        let (next, _) = update(
            state,
            Msg::GenerationFinished {
                submission_id,
                result: Ok(GenerationResult {
                    title: title.to_string(),
                    script: script.to_string(),
                }),
            },
        );
        state = next;
    }
    state
}

#[test]
fn empty_session_has_no_latest() {
    let view = AppState::new().view();
    assert_eq!(view.phase, SessionPhase::Empty);
    assert!(view.latest.is_none());
    assert!(view.history_rows.is_empty());
}

#[test]
fn single_result_renders_in_full_with_no_rows() {
    let view = with_results(&[("Only", "the whole script")]).view();

    let latest = view.latest.expect("latest result");
    assert_eq!(latest.title, "Only");
    assert_eq!(latest.script, "the whole script");
    assert_eq!(latest.download_payload, "Title: Only\n\nthe whole script");
    assert!(view.history_rows.is_empty());
}

#[test]
fn older_entries_become_numbered_snippet_rows() {
    let long_script = "s".repeat(HISTORY_SNIPPET_CHARS * 2);
    let view = with_results(&[("first", long_script.as_str()), ("second", "short")]).view();

    assert_eq!(view.latest.as_ref().map(|l| l.title.as_str()), Some("second"));
    assert_eq!(view.history_rows.len(), 1);

    let row = &view.history_rows[0];
    assert_eq!(row.position, 1);
    assert_eq!(row.title, "first");
    assert_eq!(row.snippet.chars().count(), HISTORY_SNIPPET_CHARS + 3);
    assert!(row.snippet.ends_with("..."));
}

#[test]
fn rows_keep_stored_order_newest_first() {
    let view = with_results(&[("A", "a"), ("B", "b"), ("C", "c")]).view();

    let titles: Vec<&str> = view
        .history_rows
        .iter()
        .map(|row| row.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "A"]);
    assert_eq!(view.phase, SessionPhase::Populated);
}
