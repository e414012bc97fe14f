use std::sync::mpsc;
use std::thread;

use mailpilot_core::{ComposeRequest, Effect, Msg};
use mailpilot_engine::{EngineEvent, EngineHandle, GenerationRequest};
use mailpilot_logging::{mp_debug, mp_info, mp_warn};

use super::capabilities::{ClipboardWriter, UriOpener};

/// Executes [`Effect`]s and feeds their outcomes back as [`Msg`]s.
///
/// Dropping the runner drops the engine, which disconnects the event
/// forwarder and lets every background thread finish.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardWriter>,
    opener: Box<dyn UriOpener>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn ClipboardWriter>,
        opener: Box<dyn UriOpener>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        if let Some(events) = engine.take_events() {
            spawn_event_forwarder(events, msg_tx.clone());
        } else {
            mp_warn!("Engine events already taken; generation results will not arrive");
        }
        Self {
            engine,
            clipboard,
            opener,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::GenerateReply {
                    request_id,
                    request,
                } => {
                    self.engine.generate(request_id, to_wire(request));
                }
                Effect::WriteClipboard { text } => {
                    let result = self.clipboard.write_text(&text).map_err(|err| {
                        mp_warn!("Clipboard write failed: {}", err);
                        err.to_string()
                    });
                    let _ = self.msg_tx.send(Msg::ClipboardWriteFinished(result));
                }
                Effect::OpenUri { uri } => {
                    mp_info!("Opening mail client uri_len={}", uri.len());
                    if let Err(err) = self.opener.open(&uri) {
                        mp_warn!("{}", err);
                    }
                }
                Effect::ScheduleNotificationDismiss { generation, after } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = msg_tx.send(Msg::NotificationTimerElapsed { generation });
                    });
                }
            }
        }
    }
}

fn spawn_event_forwarder(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                mp_debug!("UI loop is gone; stopping engine forwarder");
                return;
            }
        }
        mp_debug!("Engine disconnected; stopping engine forwarder");
    });
}

fn to_wire(request: ComposeRequest) -> GenerationRequest {
    GenerationRequest {
        email_content: request.email_content,
        tone: request.tone.as_str().to_string(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted {
            request_id,
            result: Ok(reply),
        } => Msg::GenerationSucceeded { request_id, reply },
        EngineEvent::GenerationCompleted {
            request_id,
            result: Err(err),
        } => Msg::GenerationFailed {
            request_id,
            cause: err.to_string(),
        },
    }
}
