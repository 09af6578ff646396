//! Accumulator and chunk-stream semantics over injected event sequences.

use futures::StreamExt;
use gigachat_client::proto::{Alternative, ChatResponse};
use gigachat_client::streaming::{accumulate, chunks};
use gigachat_client::{Error, Message};
use tonic::Status;

fn content_event(text: &str) -> Result<ChatResponse, Status> {
    Ok(ChatResponse {
        alternatives: vec![Alternative {
            message: Some(Message::assistant(text)),
            finish_reason: String::new(),
            index: 0,
        }],
        usage: None,
        model_info: None,
        timestamp: 0,
    })
}

fn empty_event() -> Result<ChatResponse, Status> {
    Ok(ChatResponse {
        alternatives: Vec::new(),
        usage: None,
        model_info: None,
        timestamp: 0,
    })
}

#[tokio::test]
async fn accumulates_chunks_in_arrival_order() {
    let events = tokio_stream::iter(vec![content_event("Hel"), content_event("lo")]);

    let mut seen = Vec::new();
    let full = accumulate(events, Some(&mut |chunk: &str| seen.push(chunk.to_string())))
        .await
        .expect("stream failed");

    assert_eq!(full, "Hello");
    assert_eq!(seen, vec!["Hel", "lo"]);
}

#[tokio::test]
async fn events_without_alternatives_are_ignored() {
    let events = tokio_stream::iter(vec![
        content_event("Hel"),
        empty_event(),
        content_event("lo"),
        empty_event(),
    ]);

    let mut calls = 0usize;
    let full = accumulate(events, Some(&mut |_: &str| calls += 1))
        .await
        .expect("stream failed");

    assert_eq!(full, "Hello");
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn error_event_rejects_and_discards_partial_text() {
    let events = tokio_stream::iter(vec![
        content_event("par"),
        Err(Status::internal("backend exploded")),
        content_event("tial"),
    ]);

    let mut seen = Vec::new();
    let err = accumulate(events, Some(&mut |chunk: &str| seen.push(chunk.to_string())))
        .await
        .unwrap_err();

    match err {
        Error::Remote { code, message } => {
            assert_eq!(code, tonic::Code::Internal);
            assert_eq!(message, "backend exploded");
        }
        other => panic!("unexpected error: {other}"),
    }
    // The chunk before the error was delivered, but no accumulated text
    // survives the failure.
    assert_eq!(seen, vec!["par"]);
}

#[tokio::test]
async fn unauthenticated_stream_error_maps_to_authorization() {
    let events = tokio_stream::iter(vec![
        content_event("x"),
        Err(Status::unauthenticated("token expired")),
    ]);

    let err = accumulate(events, Some(&mut |_: &str| {})).await.unwrap_err();
    assert!(err.is_authorization());
}

#[tokio::test]
async fn alternative_without_message_yields_empty_chunk() {
    let events = tokio_stream::iter(vec![Ok(ChatResponse {
        alternatives: vec![Alternative {
            message: None,
            finish_reason: "stop".to_string(),
            index: 0,
        }],
        usage: None,
        model_info: None,
        timestamp: 0,
    })]);

    let mut seen = Vec::new();
    let full = accumulate(events, Some(&mut |chunk: &str| seen.push(chunk.to_string())))
        .await
        .expect("stream failed");

    assert_eq!(full, "");
    assert_eq!(seen, vec![""]);
}

#[tokio::test]
async fn empty_stream_resolves_to_empty_string() {
    let events = tokio_stream::iter(Vec::<Result<ChatResponse, Status>>::new());
    let full = accumulate(events, Some(&mut |_: &str| {}))
        .await
        .expect("stream failed");
    assert_eq!(full, "");
}

#[tokio::test]
async fn chunk_stream_yields_text_and_skips_empty_events() {
    let events = tokio_stream::iter(vec![
        content_event("Hel"),
        empty_event(),
        content_event("lo"),
    ]);

    let collected: Vec<String> = chunks(events)
        .map(|chunk| chunk.expect("chunk failed"))
        .collect()
        .await;

    assert_eq!(collected, vec!["Hel", "lo"]);
}

#[tokio::test]
async fn chunk_stream_ends_at_first_error() {
    let events = tokio_stream::iter(vec![
        content_event("a"),
        Err(Status::unavailable("gone")),
        content_event("never"),
    ]);

    let collected: Vec<_> = chunks(events).collect().await;

    assert_eq!(collected.len(), 2);
    assert_eq!(collected[0].as_deref().expect("first chunk"), "a");
    assert!(collected[1].is_err());
}
