pub const APP_TITLE: &str = "Mailpilot";
pub const FOOTER_TEXT: &str = "Powered by Mailpilot AI";
pub const EMAIL_TITLE: &str = "Original Email";
pub const EMAIL_PLACEHOLDER: &str = "Paste the email content you received here...";
pub const TONE_TITLE: &str = "Tone (Optional)";
pub const REPLY_TITLE: &str = "Generated Reply";
pub const COPY_LABEL: &str = "Copy to Clipboard";
pub const OPEN_MAIL_LABEL: &str = "Open in Mail";

pub const HELP_TEXT: &str =
    "Tab focus · Ctrl+G generate · Ctrl+Y copy · Ctrl+O open in mail · Esc dismiss · Ctrl+Q quit";

pub const NOTIFICATION_WIDTH: u16 = 40;
pub const EMAIL_MIN_HEIGHT: u16 = 8;
