use crate::view_model::{ComposerViewModel, NotificationView, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
use crate::{Notification, Severity, Tone};

pub type RequestId = u64;

/// The only failure text ever shown for a generation call.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate email reply. Please try again.";

/// Payload built from the form on each submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    pub email_content: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    email_content: String,
    tone: Tone,
    status: RequestStatus,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    reply: String,
    error: Option<String>,
    last_failure_cause: Option<String>,
    notification: Notification,
    notification_generation: u64,
    dirty: bool,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ComposerViewModel {
        let busy = self.is_busy();
        ComposerViewModel {
            email_content: self.email_content.clone(),
            tone: self.tone,
            status: self.status,
            busy,
            can_submit: self.can_submit(),
            submit_label: if busy {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            error: self.error.clone(),
            reply: (!self.reply.is_empty()).then(|| self.reply.clone()),
            notification: self.notification.visible.then(|| NotificationView {
                message: self.notification.message.clone(),
                severity: self.notification.severity,
            }),
        }
    }

    pub fn email_content(&self) -> &str {
        &self.email_content
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Last successful reply; empty until the first success.
    pub fn reply(&self) -> &str {
        &self.reply
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Underlying reason of the most recent generation failure.
    pub fn last_failure_cause(&self) -> Option<&str> {
        self.last_failure_cause.as_deref()
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.email_content.is_empty() && !self.is_busy()
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_email_content(&mut self, content: String) {
        if self.email_content != content {
            self.email_content = content;
            self.dirty = true;
        }
    }

    pub(crate) fn set_tone(&mut self, tone: Tone) {
        if self.tone != tone {
            self.tone = tone;
            self.dirty = true;
        }
    }

    /// Moves to `Pending` and snapshots the form, unless the gate is closed.
    pub(crate) fn begin_request(&mut self) -> Option<(RequestId, ComposeRequest)> {
        if !self.can_submit() {
            return None;
        }
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.status = RequestStatus::Pending;
        self.error = None;
        self.dirty = true;
        Some((
            request_id,
            ComposeRequest {
                email_content: self.email_content.clone(),
                tone: self.tone,
            },
        ))
    }

    pub(crate) fn complete_success(&mut self, request_id: RequestId, reply: String) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        self.status = RequestStatus::Succeeded;
        self.reply = reply;
        true
    }

    pub(crate) fn complete_failure(&mut self, request_id: RequestId, cause: String) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
        self.last_failure_cause = Some(cause);
        true
    }

    /// Clears the busy flag if `request_id` is the one in flight.
    fn settle(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.dirty = true;
        true
    }

    /// Shows `message`, replacing whatever is visible.
    ///
    /// Returns the generation to arm a dismiss timer for when the slot went
    /// from hidden to visible; a replacement keeps the running timer.
    pub(crate) fn notify(&mut self, message: &str, severity: Severity) -> Option<u64> {
        let was_visible = self.notification.visible;
        self.notification = Notification {
            message: message.to_string(),
            severity,
            visible: true,
        };
        self.dirty = true;
        if was_visible {
            None
        } else {
            self.notification_generation += 1;
            Some(self.notification_generation)
        }
    }

    pub(crate) fn expire_notification(&mut self, generation: u64) {
        if generation == self.notification_generation {
            self.dismiss_notification();
        }
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.visible {
            self.notification.visible = false;
            self.dirty = true;
        }
    }
}
