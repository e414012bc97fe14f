use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mailpilot_core::{ComposerViewModel, Msg};

use super::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    ToggleFocus,
    Quit,
    Ignore,
}

/// Maps a terminal event to what the form should do with it.
pub fn map_event(event: &Event, view: &ComposerViewModel, focus: Focus) -> UiAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, view, focus),
        Event::Paste(text) if focus == Focus::Email => {
            let pasted = text.replace('\r', "");
            edit_content(view, |content| content.push_str(&pasted))
        }
        _ => UiAction::Ignore,
    }
}

fn map_key(key: &KeyEvent, view: &ComposerViewModel, focus: Focus) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => UiAction::Quit,
            KeyCode::Char('g') => UiAction::Dispatch(Msg::SubmitClicked),
            KeyCode::Char('y') => UiAction::Dispatch(Msg::CopyClicked),
            KeyCode::Char('o') => UiAction::Dispatch(Msg::OpenInMailClicked),
            _ => UiAction::Ignore,
        };
    }

    match (key.code, focus) {
        (KeyCode::Tab | KeyCode::BackTab, _) => UiAction::ToggleFocus,
        (KeyCode::Esc, _) => UiAction::Dispatch(Msg::NotificationDismissed),
        (KeyCode::Char(ch), Focus::Email) => edit_content(view, |content| content.push(ch)),
        (KeyCode::Enter, Focus::Email) => edit_content(view, |content| content.push('\n')),
        (KeyCode::Backspace, Focus::Email) => {
            if view.email_content.is_empty() {
                UiAction::Ignore
            } else {
                edit_content(view, |content| {
                    content.pop();
                })
            }
        }
        (KeyCode::Left | KeyCode::Up, Focus::Tone) => {
            UiAction::Dispatch(Msg::ToneSelected(view.tone.previous()))
        }
        (KeyCode::Right | KeyCode::Down | KeyCode::Char(' '), Focus::Tone) => {
            UiAction::Dispatch(Msg::ToneSelected(view.tone.next()))
        }
        _ => UiAction::Ignore,
    }
}

fn edit_content(view: &ComposerViewModel, edit: impl FnOnce(&mut String)) -> UiAction {
    let mut content = view.email_content.clone();
    edit(&mut content);
    UiAction::Dispatch(Msg::EmailContentChanged(content))
}
