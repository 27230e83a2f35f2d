/// Input events the demo host reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed at a cell.
    Click { x: u16, y: u16, button: MouseButton },
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Translate a raw crossterm event. Key releases, repeats, keys the host
    /// has no use for and mouse motion are dropped.
    pub fn from_crossterm(raw: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match raw {
            CtEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Some(Event::Key {
                    key: Key::from_code(key_event.code)?,
                    modifiers: key_event.modifiers.into(),
                })
            }
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                _ => None,
            },
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

impl Key {
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
