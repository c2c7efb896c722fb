//! # Tally GUI Application
//!
//! Graphical calculator built with Iced for native desktops and the browser
//! (wasm32 + WebGPU). All calculator behavior lives in `calc_core`; this
//! crate only turns button presses and key events into engine inputs and
//! draws the frame the engine hands back.

mod ui;
#[cfg(target_arch = "wasm32")]
mod web;

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, rule};
use iced::{event, window, Element, Event, Length, Subscription};

use calc_core::keymap::Keypad;
use calc_core::{CalculatorEngine, DisplayFrame, DisplaySink, EngineConfig, Input};

/// Display sink that keeps the most recent frame for `view`.
#[derive(Debug, Default)]
pub struct LatestFrame {
    pub frame: DisplayFrame,
}

impl DisplaySink for LatestFrame {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frame = frame.clone();
    }
}

/// Application state
pub struct App {
    engine: CalculatorEngine<LatestFrame>,
    keypad: Keypad,
    /// Where the engine config came from
    config_source: String,
}

/// Messages produced by the keypad and the keyboard subscription
#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button was clicked
    ButtonPressed(Input),
    /// A keyboard key, by browser key name
    KeyPressed(String),
}

impl App {
    fn new() -> Self {
        let (config, config_source) = load_engine_config();
        tracing::info!(source = %config_source, "starting calculator");

        App {
            engine: CalculatorEngine::with_config(config, LatestFrame::default()),
            keypad: Keypad::new(),
            config_source,
        }
    }

    fn title(&self) -> String {
        if self.engine.sink().frame.is_error {
            "Tally - Error".to_string()
        } else {
            "Tally".to_string()
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ButtonPressed(input) => {
                self.engine.handle(input);
            }
            Message::KeyPressed(key) => {
                self.engine.handle_key(&key);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let frame = &self.engine.sink().frame;

        let content = column![
            ui::display::view_display(frame),
            ui::keypad::view_keypad(&self.keypad),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(self.engine.state().phase(), &self.config_source),
        ]
        .spacing(12)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(key_message)
    }
}

/// Translate an Iced key event into the browser key name the keymap expects.
fn key_message(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    // Leave Ctrl/Cmd shortcuts (copy, reload) to the platform
    if modifiers.command() || modifiers.control() {
        return None;
    }

    let name = match key.as_ref() {
        Key::Character(c) => c.to_string(),
        Key::Named(Named::Enter) => "Enter".to_string(),
        Key::Named(Named::Backspace) => "Backspace".to_string(),
        Key::Named(Named::Escape) => "Escape".to_string(),
        _ => return None,
    };

    Some(Message::KeyPressed(name))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_engine_config() -> (EngineConfig, String) {
    let Ok(path) = std::env::var("CALC_CONFIG") else {
        return (EngineConfig::default(), "default config".to_string());
    };

    match calc_core::load_config(std::path::Path::new(&path)) {
        Ok(config) => (config, path),
        Err(e) => {
            tracing::warn!(code = e.error_code(), "{}", e);
            (EngineConfig::default(), format!("default config ({})", e.error_code()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_engine_config() -> (EngineConfig, String) {
    (EngineConfig::default(), "default config".to_string())
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        web::install_key_guard();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = calc_core::telemetry::init_default_tracing();
    }

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((340.0, 520.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::Operation;

    #[test]
    fn test_update_drives_engine() {
        let mut app = App {
            engine: CalculatorEngine::new(LatestFrame::default()),
            keypad: Keypad::new(),
            config_source: "test".to_string(),
        };

        app.update(Message::KeyPressed("9".to_string()));
        app.update(Message::ButtonPressed(Input::Operator(Operation::Divide)));
        app.update(Message::KeyPressed("0".to_string()));
        app.update(Message::KeyPressed("Enter".to_string()));

        assert_eq!(app.engine.sink().frame.display, "Error");
        assert_eq!(app.title(), "Tally - Error");

        app.update(Message::KeyPressed("Escape".to_string()));
        assert_eq!(app.engine.sink().frame.display, "0");
    }
}
