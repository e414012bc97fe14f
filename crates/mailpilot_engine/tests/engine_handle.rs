use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use mailpilot_engine::{
    EngineEvent, EngineHandle, FailureKind, GenerateError, GenerationRequest, ReplyGenerator,
    SubmitError,
};

struct EchoGenerator;

#[async_trait::async_trait]
impl ReplyGenerator for EchoGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        if request.email_content == "fail" {
            return Err(GenerateError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            });
        }
        if request.email_content == "hang" {
            std::future::pending::<()>().await;
        }
        Ok(format!("[{}] {}", request.tone, request.email_content))
    }
}

fn request(content: &str, tone: &str) -> GenerationRequest {
    GenerationRequest {
        email_content: content.to_string(),
        tone: tone.to_string(),
    }
}

fn wait_for_event(events: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn completed_generation_is_reported_with_its_request_id() {
    let engine = EngineHandle::with_generator(Arc::new(EchoGenerator)).expect("engine");
    let events = engine.take_events().expect("events");
    engine.generate(7, request("Can we reschedule?", "friendly"));

    assert_eq!(
        wait_for_event(&events),
        EngineEvent::GenerationCompleted {
            request_id: 7,
            result: Ok("[friendly] Can we reschedule?".to_string()),
        }
    );
    assert!(events.try_recv().is_err());
}

#[test]
fn failed_generation_carries_the_cause() {
    let engine = EngineHandle::with_generator(Arc::new(EchoGenerator)).expect("engine");
    let events = engine.take_events().expect("events");
    engine.generate(1, request("fail", ""));

    let EngineEvent::GenerationCompleted { request_id, result } = wait_for_event(&events);
    assert_eq!(request_id, 1);
    assert_eq!(
        result,
        Err(SubmitError::Generate(GenerateError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        }))
    );
}

#[test]
fn events_can_only_be_taken_once() {
    let engine = EngineHandle::with_generator(Arc::new(EchoGenerator)).expect("engine");
    assert!(engine.take_events().is_some());
    assert!(engine.take_events().is_none());
}

#[test]
fn dropping_the_handle_disconnects_events() {
    let engine = EngineHandle::with_generator(Arc::new(EchoGenerator)).expect("engine");
    let events = engine.take_events().expect("events");
    // A request that never settles must not keep the engine alive.
    engine.generate(1, request("hang", ""));
    drop(engine);

    assert_eq!(
        events.recv_timeout(Duration::from_secs(5)),
        Err(RecvTimeoutError::Disconnected)
    );
}
