use std::fmt;

use crate::coords::{Pos, Size};

/// Keyboard key identifier.
///
/// Printable keys arrive as `Char` with the character the terminal reported
/// (so `Shift+s` is `Char('S')`). Use [`Key::char_eq_ignore_case`] for
/// shortcut matching.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Char(char),

    Escape,
    Enter,
    Tab,
    BackTab,
    Backspace,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Function key `F(n)`.
    F(u8),

    /// Terminal key not represented here.
    Unknown,
}

impl Key {
    /// The space bar.
    pub const SPACE: Key = Key::Char(' ');

    /// `true` when both are `Char` keys equal up to ASCII case, or identical.
    pub fn char_eq_ignore_case(self, other: Key) -> bool {
        match (self, other) {
            (Key::Char(a), Key::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Escape => f.write_str("Esc"),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Repeated,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false, meta: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Any modifier other than shift.
    pub fn any_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A key press as seen by widgets: the key plus the modifiers held with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Matches `Ctrl+<c>` regardless of case.
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.ctrl && self.key.char_eq_ignore_case(Key::Char(c))
    }
}

/// Pointer button event in cell coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub pos: Pos,
    pub modifiers: Modifiers,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
    },

    PointerMoved(Pos),
    PointerButton(PointerButtonEvent),

    /// Terminal resized to the given size in cells.
    Resized(Size),

    /// Terminal focus change (only reported by terminals that support it).
    Focused(bool),
}
