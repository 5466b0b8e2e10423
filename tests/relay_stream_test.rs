use async_trait::async_trait;
use mockito::{Matcher, Server};
use std::{collections::VecDeque, sync::Arc};
use trip_saver_rs::{
    core::{CompletionRequest, FragmentStream},
    estimate_budget, spawn_generation, FailureKind, GenerationOutcome, GenerationProvider,
    ItineraryPlanner, RelayEvent, TripRequest, EMPTY_RESPONSE_PLACEHOLDER,
};

fn sse_body(fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        let chunk = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion.chunk",
            "choices": [{"index": 0, "delta": {"content": fragment}, "finish_reason": null}]
        });
        body.push_str(&format!("data: {chunk}\n\n"));
    }
    body.push_str("data: {\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"stop\"}]}\n\n");
    body.push_str("data: [DONE]\n\n");
    body
}

fn planner_for(server: &Server) -> ItineraryPlanner {
    ItineraryPlanner::new("test-key").with_base_url(server.url())
}

#[tokio::test]
async fn test_fragments_stream_to_sink_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "llama-3.3-70b-versatile",
            "stream": true
        })))
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&["Hello, ", "world!"]))
        .create_async()
        .await;

    let mut seen: Vec<String> = Vec::new();
    let outcome = planner_for(&server).generate("hi", Some(&mut seen)).await;

    mock.assert_async().await;
    assert_eq!(seen, vec!["Hello, ".to_string(), "world!".to_string()]);
    assert_eq!(outcome, GenerationOutcome::success("Hello, world!"));
}

#[tokio::test]
async fn test_prompt_carries_trip_details() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Rishikesh, India".to_string()),
            Matcher::Regex("professional travel planner".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&["Day 1: Ganga Aarti"]))
        .create_async()
        .await;

    let request = TripRequest::new("Rishikesh", 4, "budget", 3);
    let breakdown = estimate_budget(&request);
    let outcome = planner_for(&server)
        .plan_trip(&request, &breakdown, None)
        .await;

    mock.assert_async().await;
    assert_eq!(outcome.text(), Some("Day 1: Ganga Aarti"));
}

#[tokio::test]
async fn test_empty_stream_yields_placeholder() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&[]))
        .create_async()
        .await;

    let outcome = planner_for(&server).generate("hi", None).await;
    assert_eq!(outcome.text(), Some(EMPTY_RESPONSE_PLACEHOLDER));
}

#[tokio::test]
async fn test_invalid_key_is_auth_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#,
        )
        .create_async()
        .await;

    let mut seen: Vec<String> = Vec::new();
    let outcome = planner_for(&server).generate("hi", Some(&mut seen)).await;

    assert!(seen.is_empty());
    assert_eq!(outcome.failure_kind(), Some(FailureKind::AuthError));
}

#[tokio::test]
async fn test_exhausted_quota_is_quota_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(
            r#"{"error":{"message":"You exceeded your current plan","type":"insufficient_quota","code":"insufficient_quota"}}"#,
        )
        .create_async()
        .await;

    let outcome = planner_for(&server).generate("hi", None).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::QuotaError));
}

#[tokio::test]
async fn test_error_event_after_fragment() {
    let mut server = Server::new_async().await;
    let body = format!(
        "{}data: {}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Day 1\"}}]}\n\n",
        r#"{"error":{"message":"Service unavailable","type":"server_error"}}"#
    );
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(body)
        .create_async()
        .await;

    let mut seen: Vec<String> = Vec::new();
    let outcome = planner_for(&server).generate("hi", Some(&mut seen)).await;

    assert_eq!(seen, vec!["Day 1".to_string()]);
    match outcome {
        GenerationOutcome::Failure { kind, message } => {
            assert_eq!(kind, FailureKind::GenericError);
            assert!(message.contains("Service unavailable"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_provider_is_generic_error() {
    let planner = ItineraryPlanner::new("test-key").with_base_url("http://127.0.0.1:9");
    let outcome = planner.generate("hi", None).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::GenericError));
}

#[tokio::test]
async fn test_spawned_generation_reports_events_in_order() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&["Pack ", "light"]))
        .create_async()
        .await;

    let mut handle = spawn_generation(planner_for(&server), "packing list".to_string());
    let mut events = Vec::new();
    while let Some(event) = handle.next_event().await {
        let done = matches!(event, RelayEvent::Finished(_));
        events.push(event);
        if done {
            break;
        }
    }

    assert_eq!(
        events,
        vec![
            RelayEvent::Fragment("Pack ".to_string()),
            RelayEvent::Fragment("light".to_string()),
            RelayEvent::Finished(GenerationOutcome::success("Pack light")),
        ]
    );
}

#[tokio::test]
async fn test_drain_collects_fragments() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&["a", "b", "c"]))
        .create_async()
        .await;

    let handle = spawn_generation(planner_for(&server), "abc".to_string());
    let mut collected = String::new();
    let outcome = handle.drain(|fragment| collected.push_str(fragment)).await;

    assert_eq!(collected, "abc");
    assert_eq!(outcome.text(), Some("abc"));
}

#[tokio::test]
async fn test_plain_json_error_with_ok_status_is_classified() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"error":{"message":"Invalid API Key","code":"invalid_api_key"}}"#)
        .create_async()
        .await;

    let mut seen: Vec<String> = Vec::new();
    let outcome = planner_for(&server).generate("hi", Some(&mut seen)).await;

    assert!(seen.is_empty());
    assert_eq!(outcome.failure_kind(), Some(FailureKind::AuthError));
}

#[tokio::test]
async fn test_json_content_type_instead_of_stream_is_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"Monthly billing limit reached","type":"insufficient_quota"}}"#)
        .create_async()
        .await;

    let outcome = planner_for(&server).generate("hi", None).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::QuotaError));
}

#[tokio::test]
async fn test_multi_line_error_body_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(
            "{\n  \"error\": {\n    \"message\": \"Invalid API Key\",\n    \"code\": \"invalid_api_key\"\n  }\n}\n",
        )
        .create_async()
        .await;

    let outcome = planner_for(&server).generate("hi", None).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::AuthError));
}

/// Replies to each prompt with its own script, yielding between fragments so
/// concurrent streams interleave.
#[derive(Debug)]
struct PerPromptProvider;

struct YieldingStream {
    fragments: VecDeque<String>,
}

#[async_trait]
impl FragmentStream for YieldingStream {
    async fn next_fragment(&mut self) -> trip_saver_rs::Result<Option<String>> {
        tokio::task::yield_now().await;
        Ok(self.fragments.pop_front())
    }
}

#[async_trait]
impl GenerationProvider for PerPromptProvider {
    async fn open_stream(
        &self,
        request: &CompletionRequest,
    ) -> trip_saver_rs::Result<Box<dyn FragmentStream>> {
        let fragments = (1..=5)
            .map(|day| format!("{} day {day}. ", request.prompt))
            .collect();
        Ok(Box::new(YieldingStream { fragments }))
    }
}

#[tokio::test]
async fn test_concurrent_generations_keep_separate_accumulators() {
    let planner = ItineraryPlanner::with_provider(Arc::new(PerPromptProvider));
    let mut goa_seen: Vec<String> = Vec::new();
    let mut jaipur_seen: Vec<String> = Vec::new();

    let (goa, jaipur) = tokio::join!(
        planner.generate("Goa", Some(&mut goa_seen)),
        planner.generate("Jaipur", Some(&mut jaipur_seen)),
    );

    let expected = |name: &str| -> Vec<String> {
        (1..=5).map(|day| format!("{name} day {day}. ")).collect()
    };
    assert_eq!(goa_seen, expected("Goa"));
    assert_eq!(jaipur_seen, expected("Jaipur"));
    assert_eq!(goa, GenerationOutcome::success(expected("Goa").concat()));
    assert_eq!(jaipur, GenerationOutcome::success(expected("Jaipur").concat()));
}
