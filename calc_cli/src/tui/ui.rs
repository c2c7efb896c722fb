//! TUI rendering

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use calc_core::keymap::{Keypad, KeypadButton};
use calc_core::{DisplayFrame, Input};

const HELP: &str = "0-9 . + - * / %  Enter =  Backspace  Esc/c clear  q quit";

/// Draw the whole calculator
pub fn render(f: &mut Frame, frame: &DisplayFrame, keypad: &Keypad) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Expression + display
            Constraint::Min(10),   // Keypad
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_display(f, chunks[0], frame);
    render_keypad(f, chunks[1], keypad);

    let help = Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray)));
    f.render_widget(help, chunks[2]);
}

fn render_display(f: &mut Frame, area: Rect, frame: &DisplayFrame) {
    let value_style = if frame.is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(frame.expression.as_str(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(frame.display.as_str(), value_style)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title(" Tally "));
    f.render_widget(display, area);
}

fn render_keypad(f: &mut Frame, area: Rect, keypad: &Keypad) {
    let row_count = keypad.rows().len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(keypad.rows().iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    for (row, row_area) in keypad.rows().iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                row.iter()
                    .map(|b| Constraint::Ratio(u32::from(b.span), u32::from(Keypad::COLUMNS))),
            )
            .split(*row_area);

        for (button, cell) in row.iter().zip(cells.iter()) {
            render_button(f, *cell, button);
        }
    }
}

fn render_button(f: &mut Frame, area: Rect, button: &KeypadButton) {
    let color = match button.input {
        Input::Equals => Color::Cyan,
        Input::Clear => Color::Red,
        _ if button.is_operator() => Color::Yellow,
        _ => Color::White,
    };

    let widget = Paragraph::new(Span::styled(button.label.as_str(), Style::default().fg(color)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(widget, area);
}
