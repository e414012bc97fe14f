use std::time::Duration;

use crate::{ComposeRequest, RequestId};

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post the request to the generation service.
    GenerateReply {
        request_id: RequestId,
        request: ComposeRequest,
    },
    /// Write exactly `text` to the system clipboard.
    WriteClipboard { text: String },
    /// Hand a URI (a `mailto:` link) to the platform opener.
    OpenUri { uri: String },
    /// Deliver `Msg::NotificationTimerElapsed { generation }` after `after`.
    ScheduleNotificationDismiss { generation: u64, after: Duration },
}
