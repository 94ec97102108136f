// Raw pointer/keyboard input mapped onto round commands.
use crate::state::PointerState;

/// Discrete commands understood by a `Round`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Pick whichever tile lies under the canvas point, if any.
    PickAt { x: f64, y: f64 },
    Submit,
    RemoveLast,
    Clear,
    NextTheme,
    TogglePause,
    Restart,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// `code` is the physical key code ("Enter", "Space"), `key` the produced value ("t").
    Key { code: String, key: String },
}

impl InputEvent {
    pub fn key(code: &str, key: &str) -> Self {
        InputEvent::Key {
            code: code.to_string(),
            key: key.to_string(),
        }
    }
}

/// Keyboard binding for one key press.
pub fn key_command(code: &str, key: &str) -> Option<Command> {
    match code {
        "Enter" | "NumpadEnter" => return Some(Command::Submit),
        "Backspace" => return Some(Command::RemoveLast),
        "Space" => return Some(Command::Clear),
        _ => {}
    }
    match key.to_ascii_lowercase().as_str() {
        "t" => Some(Command::NextTheme),
        "p" => Some(Command::TogglePause),
        "r" => Some(Command::Restart),
        _ => None,
    }
}

#[derive(Default, Debug, Clone)]
pub struct InputDispatcher {
    pub pointer: PointerState,
}

impl InputDispatcher {
    /// Translates one event. Pointer moves only pick while the button is held.
    pub fn translate(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer.press();
                Some(Command::PickAt { x: *x, y: *y })
            }
            InputEvent::PointerMove { x, y } => {
                if self.pointer.dragging() {
                    Some(Command::PickAt { x: *x, y: *y })
                } else {
                    None
                }
            }
            InputEvent::PointerUp => {
                self.pointer.release();
                None
            }
            InputEvent::Key { code, key } => key_command(code, key),
        }
    }
}
