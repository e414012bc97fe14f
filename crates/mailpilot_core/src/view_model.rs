use crate::{RequestStatus, Severity, Tone};

pub const SUBMIT_LABEL_IDLE: &str = "Generate Reply";
pub const SUBMIT_LABEL_BUSY: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerViewModel {
    pub email_content: String,
    pub tone: Tone,
    pub status: RequestStatus,
    pub busy: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
    /// Inline error alert, if any.
    pub error: Option<String>,
    /// Present only once a non-empty reply has arrived.
    pub reply: Option<String>,
    pub notification: Option<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub message: String,
    pub severity: Severity,
}
