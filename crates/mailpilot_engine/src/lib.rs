//! Mailpilot engine: generation client, single-flight controller and the
//! background runtime that executes generation effects.
mod controller;
mod engine;
mod generate;
mod settings;
mod types;

pub use controller::RequestController;
pub use engine::{EngineError, EngineHandle};
pub use generate::{coerce_reply_body, ReplyGenerator, ReqwestReplyGenerator};
pub use settings::{GeneratorSettings, SettingsError, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use types::{
    EngineEvent, FailureKind, GenerateError, GenerationRequest, RequestId, SubmitError,
};
