//! Mailpilot core: pure reply-composer state machine and view-model helpers.
mod effect;
mod mailto;
mod msg;
mod notification;
mod state;
mod tone;
mod update;
mod view_model;

pub use effect::Effect;
pub use mailto::mailto_uri;
pub use msg::Msg;
pub use notification::{
    Notification, Severity, COPY_FAILED_MESSAGE, COPY_SUCCEEDED_MESSAGE, NOTIFICATION_TIMEOUT,
};
pub use state::{ComposeRequest, ComposerState, RequestId, RequestStatus, GENERATION_FAILED_MESSAGE};
pub use tone::Tone;
pub use update::update;
pub use view_model::{ComposerViewModel, NotificationView, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
