//! Normalised pointer, key and wheel events delivered by the host.

use serde::{Deserialize, Serialize};

use crate::geometry::vector::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl PointerButton {
    /// DOM `MouseEvent.button` numbering.
    pub fn from_index(i: u8) -> Option<PointerButton> {
        match i {
            0 => Some(PointerButton::Left),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

/// Buttons currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buttons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Buttons {
    /// From DOM `MouseEvent.buttons`.
    pub fn from_bits(bits: u16) -> Self {
        Self { left: bits & 1 != 0, right: bits & 2 != 0, middle: bits & 4 != 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// CSS pixels relative to the canvas.
    pub screen_pos: Vector2,
    pub button: PointerButton,
    pub buttons: Buttons,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(screen_pos: Vector2, button: PointerButton) -> Self {
        Self { screen_pos, button, buttons: Buttons::default(), modifiers: Modifiers::default() }
    }

    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    /// DOM `KeyboardEvent.key`.
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self { key: key.into(), modifiers }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub dy: f64,
}
