use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use mailpilot_core::{update, ComposerState, ComposerViewModel, Msg};
use mailpilot_engine::{EngineHandle, GeneratorSettings};
use mailpilot_logging::{mp_debug, mp_info, mp_warn};
use ratatui::DefaultTerminal;

use super::capabilities::{ArboardClipboard, SystemUriOpener};
use super::effects::EffectRunner;
use super::logging;
use super::ui::keys::{self, UiAction};
use super::ui::{render, Focus};

const TICK: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    if let Some(path) = logging::initialize() {
        mp_info!("Logging to {:?}", path);
    }

    let settings = GeneratorSettings::from_env()?;
    let engine = EngineHandle::new(settings).context("starting generation engine")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        engine,
        Box::new(ArboardClipboard::default()),
        Box::new(SystemUriOpener),
        msg_tx,
    );
    let mut composer = Composer::new(runner);

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    let result = run_restoring(
        restore_terminal,
        || execute!(io::stdout(), EnableBracketedPaste).context("enabling bracketed paste"),
        || event_loop(&mut terminal, &mut composer, &msg_rx),
    );
    mp_info!("Mailpilot exited");
    result
}

/// Calls `restore` when dropped.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Runs `setup` then `body`; `restore` runs on every exit path, including a failed setup.
fn run_restoring<T>(
    restore: impl FnMut(),
    setup: impl FnOnce() -> anyhow::Result<()>,
    body: impl FnOnce() -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let _guard = RestoreGuard { restore };
    setup()?;
    body()
}

fn restore_terminal() {
    if let Err(err) = execute!(io::stdout(), DisableBracketedPaste) {
        mp_warn!("Failed to disable bracketed paste: {}", err);
    }
    if let Err(err) = ratatui::try_restore() {
        mp_warn!("Failed to restore terminal: {}", err);
    }
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    composer: &mut Composer,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut focus = Focus::default();
    let mut view = composer.view();
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|frame| render::render(frame, &view, focus))?;
            needs_render = false;
        }

        if event::poll(TICK)? {
            let event = event::read()?;
            match keys::map_event(&event, &view, focus) {
                UiAction::Dispatch(msg) => {
                    if composer.dispatch(msg) {
                        view = composer.view();
                        needs_render = true;
                    }
                }
                UiAction::ToggleFocus => {
                    focus = focus.toggle();
                    needs_render = true;
                }
                UiAction::Quit => return Ok(()),
                UiAction::Ignore => {
                    if matches!(event, event::Event::Resize(..)) {
                        needs_render = true;
                    }
                }
            }
        }

        while let Ok(msg) = msg_rx.try_recv() {
            if composer.dispatch(msg) {
                view = composer.view();
                needs_render = true;
            }
        }
    }
}

/// Owns the state record and routes each message through `update`.
pub(crate) struct Composer {
    state: ComposerState,
    runner: EffectRunner,
}

impl Composer {
    pub(crate) fn new(runner: EffectRunner) -> Self {
        Self {
            state: ComposerState::new(),
            runner,
        }
    }

    pub(crate) fn view(&self) -> ComposerViewModel {
        self.state.view()
    }

    /// Applies `msg`, runs resulting effects, and reports whether a redraw is due.
    pub(crate) fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if !effects.is_empty() {
            mp_debug!("Running {} effect(s)", effects.len());
        }
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.run(effects);
        was_dirty
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ComposerState {
        &self.state
    }
}
