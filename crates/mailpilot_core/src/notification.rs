use std::time::Duration;

/// How long a notification stays visible before it dismisses itself.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

pub const COPY_SUCCEEDED_MESSAGE: &str = "Reply copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// The single transient status slot.
///
/// Hiding keeps the last message around; only `visible` decides whether it
/// is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}
