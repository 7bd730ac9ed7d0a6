use scribe_core::{GenerationRequest, Language, ScriptLength, SubmissionId, Tone};
use scribe_engine::{
    EngineConfig, EngineEvent, EngineHandle, GeminiSettings, SummaryOutcome, WikiSettings,
    DEFAULT_MODEL,
};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(wiki: &MockServer, gemini: &MockServer) -> EngineConfig {
    EngineConfig {
        wiki: WikiSettings {
            endpoint_override: Some(wiki.uri()),
            ..WikiSettings::default()
        },
        gemini: GeminiSettings {
            base_url: gemini.uri(),
            ..GeminiSettings::new("test-key")
        },
    }
}

fn request(topic: &str) -> GenerationRequest {
    GenerationRequest {
        topic: topic.to_string(),
        tone: Tone::CasualConversational,
        length: ScriptLength::Medium,
        language: Language::English,
    }
}

/// Drives one submission through a real engine thread and collects its
/// two events. Runs on a blocking task because the handle's receiver
/// blocks the calling thread.
async fn run_submission(
    config: EngineConfig,
    submission_id: SubmissionId,
    req: GenerationRequest,
) -> (EngineEvent, EngineEvent) {
    tokio::task::spawn_blocking(move || {
        let engine = EngineHandle::new(config);
        engine.generate(submission_id, req);
        let first = engine.recv().expect("summary event");
        let second = engine.recv().expect("completion event");
        (first, second)
    })
    .await
    .expect("engine task")
}

#[tokio::test(flavor = "multi_thread")]
async fn full_submission_produces_summary_then_result() {
    let wiki = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Volcanoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "extract": "p1\np2\np3\np4"
        })))
        .mount(&wiki)
        .await;

    // Same canned answer for both stages; the pipeline only cares that
    // line 0 of the first response becomes the title.
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{DEFAULT_MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Volcano Secrets\nMore Titles" } ] } }
            ]
        })))
        .expect(2)
        .mount(&gemini)
        .await;

    let (first, second) =
        run_submission(config_for(&wiki, &gemini), 1, request("Volcanoes")).await;

    assert_eq!(
        first,
        EngineEvent::SummaryFetched {
            submission_id: 1,
            outcome: SummaryOutcome::Found("p1\np2\np3".to_string()),
        }
    );
    match second {
        EngineEvent::GenerationCompleted {
            submission_id: 1,
            result: Ok(result),
        } => {
            assert!(!result.title.is_empty());
            assert!(!result.script.is_empty());
            assert_eq!(result.title, "Volcano Secrets");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_page_still_generates_from_placeholder_text() {
    let wiki = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&wiki)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r":generateContent$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "A Title\nscript body" } ] } }
            ]
        })))
        .mount(&gemini)
        .await;

    let (first, second) =
        run_submission(config_for(&wiki, &gemini), 3, request("Xyzzy plugh")).await;

    assert_eq!(
        first,
        EngineEvent::SummaryFetched {
            submission_id: 3,
            outcome: SummaryOutcome::NotFound,
        }
    );
    assert!(matches!(
        second,
        EngineEvent::GenerationCompleted {
            submission_id: 3,
            result: Ok(_),
        }
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn generation_fault_reaches_the_caller_as_an_error_event() {
    let wiki = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "extract": "p1" })))
        .mount(&wiki)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&gemini)
        .await;

    let (_, second) = run_submission(config_for(&wiki, &gemini), 9, request("Tea")).await;

    assert!(matches!(
        second,
        EngineEvent::GenerationCompleted {
            submission_id: 9,
            result: Err(_),
        }
    ));
}
