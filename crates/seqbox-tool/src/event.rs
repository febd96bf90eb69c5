//! Input event model.
//!
//! Hosts translate their native input stream into these events before
//! feeding the operator. Only the inputs the tool reacts to are modeled;
//! everything else should simply not be forwarded (or will pass through).

use seqbox_core::ScreenPos;
use serde::{Deserialize, Serialize};

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// The opposite button.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            MouseButton::Left => MouseButton::Right,
            MouseButton::Right => MouseButton::Left,
        }
    }
}

/// Keyboard key the tool reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Cancels a drag at any point.
    Escape,
    /// Default wait-binding shortcut.
    B,
}

/// Modifier key state at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// A single input event in host view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MousePress {
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
    },
    MouseRelease {
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
    },
    MouseMove {
        pos: ScreenPos,
    },
    KeyPress {
        key: Key,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    pub fn pos(&self) -> Option<ScreenPos> {
        match *self {
            InputEvent::MousePress { pos, .. }
            | InputEvent::MouseRelease { pos, .. }
            | InputEvent::MouseMove { pos } => Some(pos),
            InputEvent::KeyPress { .. } => None,
        }
    }
}
