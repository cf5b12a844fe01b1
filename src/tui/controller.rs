use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Characters that can begin a card code.
fn starts_card(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), '1'..='9' | 'J' | 'Q' | 'K' | 'A')
}

/// Apply one key press. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::EntryCancel);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::EntrySubmit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::EntryBackspace);
            }
            KeyCode::Char(c) => {
                let _ = app.handle_input(InputAction::EntryChar(c));
            }
            _ => {}
        }
        return false;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Calculator => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::Simulate);
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let _ = app.handle_input(InputAction::ClearAll);
            }
            KeyCode::Backspace | KeyCode::Delete => {
                let _ = app.handle_input(InputAction::ClearSlot);
            }
            KeyCode::Right | KeyCode::Tab => {
                let _ = app.handle_input(InputAction::FocusNext);
            }
            KeyCode::Left | KeyCode::BackTab => {
                let _ = app.handle_input(InputAction::FocusPrev);
            }
            KeyCode::Home => {
                let _ = app.handle_input(InputAction::FocusSlot(0));
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::EntryOpen);
            }
            KeyCode::Char(c) if starts_card(c) => {
                let _ = app.handle_input(InputAction::EntryChar(c));
            }
            _ => {}
        },
    }
    false
}
