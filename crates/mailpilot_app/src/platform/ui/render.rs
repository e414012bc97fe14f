use mailpilot_core::{ComposerViewModel, NotificationView, Severity};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::{layout, Focus};

pub fn render(frame: &mut Frame, view: &ComposerViewModel, focus: Focus) {
    let area = frame.area();
    let regions = layout::compute(area, view.error.is_some(), view.reply.is_some());

    frame.render_widget(
        Line::from(vec![
            Span::styled(APP_TITLE, Style::new().bold().fg(Color::Blue)),
            Span::raw("  "),
            Span::styled(FOOTER_TEXT, Style::new().fg(Color::DarkGray)),
        ]),
        regions.header,
    );

    render_email(frame, view, focus, regions.email);

    let (tone_area, submit_area) = layout::split_controls(regions.controls);
    render_tone(frame, view, focus, tone_area);
    render_submit(frame, view, submit_area);

    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .fg(Color::Red)
                .block(Block::bordered().border_style(Style::new().fg(Color::Red))),
            regions.error,
        );
    }

    if let Some(reply) = &view.reply {
        let actions = Line::from(vec![
            Span::raw(format!(" {COPY_LABEL} (Ctrl+Y) ")),
            Span::styled(
                format!(" {OPEN_MAIL_LABEL} (Ctrl+O) "),
                Style::new().fg(Color::Green),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(reply.as_str())
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title(REPLY_TITLE)
                        .title_bottom(actions.alignment(Alignment::Right)),
                ),
            regions.reply,
        );
    }

    frame.render_widget(
        Paragraph::new(HELP_TEXT).fg(Color::DarkGray),
        regions.help,
    );

    if let Some(notification) = &view.notification {
        render_notification(frame, notification, area);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new()
    }
}

fn render_email(frame: &mut Frame, view: &ComposerViewModel, focus: Focus, area: Rect) {
    let block = Block::bordered()
        .title(EMAIL_TITLE)
        .border_style(focus_style(focus == Focus::Email));
    let body = if view.email_content.is_empty() {
        Paragraph::new(EMAIL_PLACEHOLDER).fg(Color::DarkGray)
    } else {
        Paragraph::new(view.email_content.as_str())
    };
    frame.render_widget(body.wrap(Wrap { trim: false }).block(block), area);
}

fn render_tone(frame: &mut Frame, view: &ComposerViewModel, focus: Focus, area: Rect) {
    let label = if view.tone.as_str().is_empty() {
        Span::styled(view.tone.label(), Style::new().add_modifier(Modifier::ITALIC))
    } else {
        Span::raw(view.tone.label())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw("◀ "), label, Span::raw(" ▶")])).block(
            Block::bordered()
                .title(TONE_TITLE)
                .border_style(focus_style(focus == Focus::Tone)),
        ),
        area,
    );
}

fn render_submit(frame: &mut Frame, view: &ComposerViewModel, area: Rect) {
    let style = if view.can_submit {
        Style::new().fg(Color::White).bg(Color::Blue).bold()
    } else {
        Style::new().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(view.submit_label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered()),
        area,
    );
}

fn render_notification(frame: &mut Frame, notification: &NotificationView, area: Rect) {
    let color = match notification.severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };
    let popup = layout::notification_area(area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(notification.message.as_str())
            .alignment(Alignment::Center)
            .fg(color)
            .block(Block::bordered().border_style(Style::new().fg(color))),
        popup,
    );
}
