use crate::{RequestId, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the email body.
    EmailContentChanged(String),
    /// User picked a tone from the selector.
    ToneSelected(Tone),
    /// User clicked Generate Reply.
    SubmitClicked,
    /// Generation service answered with a reply.
    GenerationSucceeded { request_id: RequestId, reply: String },
    /// Generation call failed; `cause` is diagnostic only and never shown.
    GenerationFailed { request_id: RequestId, cause: String },
    /// User clicked Copy to Clipboard.
    CopyClicked,
    /// Clipboard write settled; the error carries the platform's reason.
    ClipboardWriteFinished(Result<(), String>),
    /// User clicked Open in Mail.
    OpenInMailClicked,
    /// Auto-dismiss timer for the given notification generation fired.
    NotificationTimerElapsed { generation: u64 },
    /// User closed the notification.
    NotificationDismissed,
}
