use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use jobscout_core::{update, AppState, Msg};
use jobscout_engine::FetchSettings;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::form::{FormOutcome, SearchForm};
use super::logging;
use super::terminal::TerminalGuard;
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let runner = EffectRunner::new(FetchSettings::from_env()).context("start fetch engine")?;

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let _guard = TerminalGuard::new();
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;

    let mut state = AppState::new();
    let mut form = SearchForm::new();

    dispatch(&mut state, &runner, Msg::Started);

    loop {
        for msg in runner.poll() {
            dispatch(&mut state, &runner, msg);
        }

        let mut quit = false;
        if event::poll(POLL_INTERVAL).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match form.handle_key(key) {
                        FormOutcome::Quit => quit = true,
                        FormOutcome::Dispatch(msg) => dispatch(&mut state, &runner, msg),
                        FormOutcome::Handled => {}
                    }
                }
                Event::Resize(_, _) => form.mark_dirty(),
                _ => {}
            }
        }
        if quit {
            break;
        }

        let state_dirty = state.consume_dirty();
        if state_dirty || form.take_dirty() {
            let view = state.view();
            terminal
                .draw(|frame| ui::render::draw(frame, &view, &form))
                .context("draw frame")?;
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}
