//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Pos;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Pointer moved while a button is held.
    Drag,
    /// Button released.
    Release,
    /// Pointer moved with no button held.
    Move,
}

/// A message delivered to a [`Model`](crate::Model).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown(Key),
    /// A mouse event at a canvas position.
    Mouse { action: MouseAction, pos: Pos },
    /// Emitted by the application loop at the configured tick interval.
    Tick,
    /// The output surface changed size.
    Screen { rows: i32, cols: i32 },
    /// Request to quit.
    Quit,
}

impl Msg {
    #[inline]
    pub fn key(key: Key) -> Self {
        Self::KeyDown(key)
    }

    #[inline]
    pub fn mouse(action: MouseAction, pos: Pos) -> Self {
        Self::Mouse { action, pos }
    }
}
