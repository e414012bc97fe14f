use crate::{
    mailto_uri, ComposerState, Effect, Msg, Severity, COPY_FAILED_MESSAGE, COPY_SUCCEEDED_MESSAGE,
    NOTIFICATION_TIMEOUT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ComposerState, msg: Msg) -> (ComposerState, Vec<Effect>) {
    let effects = match msg {
        Msg::EmailContentChanged(content) => {
            state.set_email_content(content);
            Vec::new()
        }
        Msg::ToneSelected(tone) => {
            state.set_tone(tone);
            Vec::new()
        }
        Msg::SubmitClicked => match state.begin_request() {
            Some((request_id, request)) => vec![Effect::GenerateReply {
                request_id,
                request,
            }],
            None => Vec::new(),
        },
        Msg::GenerationSucceeded { request_id, reply } => {
            state.complete_success(request_id, reply);
            Vec::new()
        }
        Msg::GenerationFailed { request_id, cause } => {
            state.complete_failure(request_id, cause);
            Vec::new()
        }
        Msg::CopyClicked => {
            if state.reply().is_empty() {
                Vec::new()
            } else {
                vec![Effect::WriteClipboard {
                    text: state.reply().to_string(),
                }]
            }
        }
        Msg::ClipboardWriteFinished(result) => {
            let (message, severity) = match result {
                Ok(()) => (COPY_SUCCEEDED_MESSAGE, Severity::Success),
                Err(_) => (COPY_FAILED_MESSAGE, Severity::Error),
            };
            notify(&mut state, message, severity)
        }
        Msg::OpenInMailClicked => {
            if state.reply().is_empty() {
                Vec::new()
            } else {
                vec![Effect::OpenUri {
                    uri: mailto_uri(state.reply()),
                }]
            }
        }
        Msg::NotificationTimerElapsed { generation } => {
            state.expire_notification(generation);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
    };

    (state, effects)
}

fn notify(state: &mut ComposerState, message: &str, severity: Severity) -> Vec<Effect> {
    match state.notify(message, severity) {
        Some(generation) => vec![Effect::ScheduleNotificationDismiss {
            generation,
            after: NOTIFICATION_TIMEOUT,
        }],
        None => Vec::new(),
    }
}
