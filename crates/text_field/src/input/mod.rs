//! Keyboard input
//!
//! [`KeyCode`] identifies physical keys; [`KeyboardState`] is the per-frame
//! snapshot hosts poll from their windowing layer and hand to widgets.

pub mod key_map;

pub use key_map::{KeyAction, KeyMap};

use std::collections::BTreeSet;

/// Key codes
///
/// Discriminants follow the conventional virtual-key numbering and variants
/// are declared in ascending code order, so the derived `Ord` sorts by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum KeyCode {
    Back = 8,
    Tab = 9,
    Enter = 13,
    Escape = 27,
    Space = 32,
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
    Insert = 45,
    Delete = 46,
    D0 = 48,
    D1 = 49,
    D2 = 50,
    D3 = 51,
    D4 = 52,
    D5 = 53,
    D6 = 54,
    D7 = 55,
    D8 = 56,
    D9 = 57,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    NumPad0 = 96,
    NumPad1 = 97,
    NumPad2 = 98,
    NumPad3 = 99,
    NumPad4 = 100,
    NumPad5 = 101,
    NumPad6 = 102,
    NumPad7 = 103,
    NumPad8 = 104,
    NumPad9 = 105,
    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,
    LeftShift = 160,
    RightShift = 161,
    LeftControl = 162,
    RightControl = 163,
    LeftAlt = 164,
    RightAlt = 165,
}

impl KeyCode {
    /// Letter keys `A` through `Z`
    pub const LETTERS: [Self; 26] = [
        Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G,
        Self::H, Self::I, Self::J, Self::K, Self::L, Self::M, Self::N,
        Self::O, Self::P, Self::Q, Self::R, Self::S, Self::T, Self::U,
        Self::V, Self::W, Self::X, Self::Y, Self::Z,
    ];

    /// Main-row digit keys, `D0` through `D9`
    pub const DIGITS: [Self; 10] = [
        Self::D0, Self::D1, Self::D2, Self::D3, Self::D4,
        Self::D5, Self::D6, Self::D7, Self::D8, Self::D9,
    ];

    /// Numeric keypad digit keys, `NumPad0` through `NumPad9`
    pub const NUMPAD_DIGITS: [Self; 10] = [
        Self::NumPad0, Self::NumPad1, Self::NumPad2, Self::NumPad3, Self::NumPad4,
        Self::NumPad5, Self::NumPad6, Self::NumPad7, Self::NumPad8, Self::NumPad9,
    ];

    /// Numeric key code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this key only modifies other keys (shift, control, alt)
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::LeftShift
                | Self::RightShift
                | Self::LeftControl
                | Self::RightControl
                | Self::LeftAlt
                | Self::RightAlt
        )
    }

    /// Whether this key is one of the shift keys
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::LeftShift | Self::RightShift)
    }
}

/// Snapshot of the keyboard for one frame
///
/// Pressed keys are kept ordered by key code, so iteration and
/// [`KeyboardState::lowest_pressed`] are deterministic regardless of the
/// order the host reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: BTreeSet<KeyCode>,
    shift: bool,
}

impl KeyboardState {
    /// Create a snapshot with no keys down
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from any collection of pressed keys
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
            shift: false,
        }
    }

    /// Add a pressed key (builder pattern)
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.pressed.insert(key);
        self
    }

    /// Set the shift flag explicitly (builder pattern)
    ///
    /// Hosts whose input layer reports modifiers as flags rather than keys
    /// use this instead of pressing `LeftShift`/`RightShift`.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Record a key press
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// Release every key and clear the shift flag
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.shift = false;
    }

    /// Whether `key` is down
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether shift is held, by flag or by either shift key
    pub fn shift_held(&self) -> bool {
        self.shift || self.pressed.iter().any(|key| key.is_shift())
    }

    /// Whether no key at all is down
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Pressed keys in ascending key-code order
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().copied()
    }

    /// The lowest-code pressed key that is not a modifier
    pub fn lowest_pressed(&self) -> Option<KeyCode> {
        self.pressed_keys().find(|key| !key.is_modifier())
    }
}
