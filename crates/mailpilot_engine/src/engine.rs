use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use mailpilot_logging::{mp_debug, mp_info, mp_warn};
use thiserror::Error;

use crate::{
    EngineEvent, GenerateError, GenerationRequest, GeneratorSettings, ReplyGenerator,
    ReqwestReplyGenerator, RequestController, RequestId,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build generation client: {0}")]
    Client(#[from] GenerateError),
}

enum EngineCommand {
    Generate {
        request_id: RequestId,
        request: GenerationRequest,
    },
}

/// Owns a tokio runtime on a background thread and reports completions as
/// [`EngineEvent`]s.
///
/// Dropping the handle closes the command channel; the engine thread then
/// shuts the runtime down and the event channel disconnects.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<Option<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: GeneratorSettings) -> Result<Self, EngineError> {
        mp_info!("Generation endpoint: {}", settings.endpoint);
        let generator = ReqwestReplyGenerator::new(settings)?;
        Self::with_generator(Arc::new(generator))
    }

    pub fn with_generator(generator: Arc<dyn ReplyGenerator>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let controller = Arc::new(RequestController::new(generator));
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let controller = controller.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&controller, command, event_tx).await;
                });
            }
            // Cancels in-flight requests, dropping their event senders.
            drop(runtime);
            mp_debug!("Engine thread stopped");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(Some(event_rx)),
        })
    }

    pub fn generate(&self, request_id: RequestId, request: GenerationRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Generate {
                request_id,
                request,
            })
            .is_err()
        {
            mp_warn!("Engine thread is gone; dropping request {}", request_id);
        }
    }

    /// Hands out the event receiver. Only the first call gets it.
    pub fn take_events(&self) -> Option<mpsc::Receiver<EngineEvent>> {
        self.event_rx.lock().ok()?.take()
    }
}

async fn handle_command(
    controller: &RequestController,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate {
            request_id,
            request,
        } => {
            mp_info!(
                "Generate request_id={} content_len={} tone={:?}",
                request_id,
                request.email_content.len(),
                request.tone
            );
            let result = controller.submit(&request).await;
            if let Err(err) = &result {
                mp_warn!("Request {} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::GenerationCompleted { request_id, result });
        }
    }
}
