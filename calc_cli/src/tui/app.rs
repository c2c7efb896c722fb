//! TUI event loop

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use calc_core::keymap::Keypad;
use calc_core::{CalculatorEngine, DisplayFrame, DisplaySink, EngineConfig};

use super::ui;

/// Display sink that keeps the latest frame for the next draw.
#[derive(Debug, Default)]
pub struct TerminalSink {
    pub frame: DisplayFrame,
}

impl DisplaySink for TerminalSink {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frame = frame.clone();
    }
}

/// What a terminal key press means to the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the engine under this browser-style key name
    Key(String),
    Quit,
    Ignore,
}

/// Map a crossterm key event to a TUI action.
pub fn translate_key(event: KeyEvent) -> KeyAction {
    if event.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c' | 'q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match event.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::Key(c.to_string()),
        KeyCode::Enter => KeyAction::Key("Enter".to_string()),
        KeyCode::Backspace => KeyAction::Key("Backspace".to_string()),
        KeyCode::Esc => KeyAction::Key("Escape".to_string()),
        _ => KeyAction::Ignore,
    }
}

/// Run the interactive calculator until the user quits.
pub fn run(config: EngineConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, config);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, config: EngineConfig) -> io::Result<()> {
    let mut engine = CalculatorEngine::with_config(config, TerminalSink::default());
    let keypad = Keypad::new();

    loop {
        terminal.draw(|f| ui::render(f, &engine.sink().frame, &keypad))?;

        if let Event::Key(key) = event::read()? {
            match translate_key(key) {
                KeyAction::Quit => break,
                KeyAction::Key(name) => {
                    engine.handle_key(&name);
                }
                KeyAction::Ignore => {}
            }
        }
    }

    tracing::debug!(state = ?engine.state(), "tui exited");
    Ok(())
}
