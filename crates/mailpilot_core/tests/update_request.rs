use std::sync::Once;

use mailpilot_core::{
    update, ComposeRequest, ComposerState, Effect, Msg, RequestStatus, Tone,
    GENERATION_FAILED_MESSAGE, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mailpilot_logging::initialize_for_tests);
}

fn fill_form(state: ComposerState, content: &str, tone: Tone) -> ComposerState {
    let (state, _) = update(state, Msg::EmailContentChanged(content.to_string()));
    let (state, _) = update(state, Msg::ToneSelected(tone));
    state
}

fn submit(state: ComposerState, content: &str, tone: Tone) -> (ComposerState, Vec<Effect>) {
    update(fill_form(state, content, tone), Msg::SubmitClicked)
}

fn request_id_of(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::GenerateReply { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("generate effect")
}

#[test]
fn initial_state_is_idle_and_gated() {
    init_logging();
    let view = ComposerState::new().view();

    assert_eq!(view.status, RequestStatus::Idle);
    assert!(!view.busy);
    assert!(!view.can_submit);
    assert_eq!(view.submit_label, SUBMIT_LABEL_IDLE);
    assert_eq!(view.reply, None);
    assert_eq!(view.error, None);
    assert_eq!(view.notification, None);
}

#[test]
fn empty_content_cannot_be_submitted() {
    init_logging();
    let state = fill_form(ComposerState::new(), "", Tone::Friendly);
    assert!(!state.view().can_submit);

    let (next, effects) = update(state.clone(), Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(next.status(), RequestStatus::Idle);
    assert_eq!(next, state);
}

#[test]
fn clearing_content_closes_the_gate_again() {
    init_logging();
    let state = fill_form(ComposerState::new(), "Hello", Tone::Unspecified);
    assert!(state.view().can_submit);

    let (state, _) = update(state, Msg::EmailContentChanged(String::new()));
    assert!(!state.view().can_submit);
}

#[test]
fn submit_snapshots_form_and_goes_pending() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "Can we reschedule?", Tone::Friendly);

    assert_eq!(
        effects,
        vec![Effect::GenerateReply {
            request_id: 1,
            request: ComposeRequest {
                email_content: "Can we reschedule?".to_string(),
                tone: Tone::Friendly,
            },
        }]
    );
    let view = state.view();
    assert_eq!(view.status, RequestStatus::Pending);
    assert!(view.busy);
    assert!(!view.can_submit);
    assert_eq!(view.submit_label, SUBMIT_LABEL_BUSY);
}

#[test]
fn submit_while_pending_is_ignored() {
    init_logging();
    let (state, _) = submit(ComposerState::new(), "Hello", Tone::Casual);

    let (next, effects) = update(state.clone(), Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn success_shows_reply_and_clears_busy() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "Can we reschedule?", Tone::Friendly);
    let request_id = request_id_of(&effects);

    let (mut state, effects) = update(
        state,
        Msg::GenerationSucceeded {
            request_id,
            reply: "Sure, how about Thursday?".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.status, RequestStatus::Succeeded);
    assert_eq!(view.reply.as_deref(), Some("Sure, how about Thursday?"));
    assert!(!view.busy);
    assert!(view.can_submit);
    assert_eq!(view.error, None);
}

#[test]
fn failure_on_first_attempt_leaves_result_empty() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "Hi", Tone::Unspecified);
    let request_id = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::GenerationFailed {
            request_id,
            cause: "http status 500".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.status, RequestStatus::Failed);
    assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
    assert_eq!(view.reply, None);
    assert!(!view.busy);
    assert_eq!(state.last_failure_cause(), Some("http status 500"));
}

#[test]
fn failure_keeps_previous_reply_and_hides_cause() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "First", Tone::Witty);
    let (state, _) = update(
        state,
        Msg::GenerationSucceeded {
            request_id: request_id_of(&effects),
            reply: "First reply".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);
    // Previous reply stays visible while the new request is in flight.
    assert_eq!(state.view().reply.as_deref(), Some("First reply"));

    let (state, _) = update(
        state,
        Msg::GenerationFailed {
            request_id: request_id_of(&effects),
            cause: "connection refused".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.reply.as_deref(), Some("First reply"));
    assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
    assert!(!view.error.unwrap().contains("connection refused"));
}

#[test]
fn new_submit_clears_previous_error() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "Hi", Tone::Unspecified);
    let (state, _) = update(
        state,
        Msg::GenerationFailed {
            request_id: request_id_of(&effects),
            cause: "timeout".to_string(),
        },
    );
    assert!(state.view().error.is_some());

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(request_id_of(&effects), 2);
    assert_eq!(state.view().error, None);
    assert_eq!(state.status(), RequestStatus::Pending);
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, _) = submit(ComposerState::new(), "Hi", Tone::Unspecified);

    let (next, effects) = update(
        state.clone(),
        Msg::GenerationSucceeded {
            request_id: 99,
            reply: "late".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(next.is_busy());
}

#[test]
fn editing_while_pending_does_not_alter_the_request() {
    init_logging();
    let (state, effects) = submit(ComposerState::new(), "Original", Tone::Professional);
    let (state, _) = update(state, Msg::EmailContentChanged("Edited".to_string()));

    assert_eq!(state.email_content(), "Edited");
    assert!(!state.view().can_submit);
    match &effects[0] {
        Effect::GenerateReply { request, .. } => assert_eq!(request.email_content, "Original"),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn repeating_an_identical_edit_is_not_a_change() {
    init_logging();
    let mut state = fill_form(ComposerState::new(), "Can we meet?", Tone::Professional);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::EmailContentChanged("Can we meet?".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ToneSelected(Tone::Professional));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
