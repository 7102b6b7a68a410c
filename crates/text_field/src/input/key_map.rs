//! Key-to-edit lookup table
//!
//! Each mapped key resolves to a small tagged [`KeyAction`]; applying an
//! action is a pure function of the current text and the shift flag.

use std::collections::HashMap;

use super::KeyCode;

/// Edit produced by a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character whose case depends on shift
    AppendFixedChar {
        /// Appended without shift
        lower: char,
        /// Appended with shift
        upper: char,
    },
    /// Append a digit regardless of shift
    AppendDigit(char),
    /// Remove the last character, if any
    Backspace,
}

impl KeyAction {
    /// Compute the text that results from applying this action to `content`
    pub fn apply(self, content: &str, shift: bool) -> String {
        match self {
            Self::AppendFixedChar { lower, upper } => {
                let mut next = String::with_capacity(content.len() + 1);
                next.push_str(content);
                next.push(if shift { upper } else { lower });
                next
            }
            Self::AppendDigit(digit) => {
                let mut next = String::with_capacity(content.len() + 1);
                next.push_str(content);
                next.push(digit);
                next
            }
            Self::Backspace => {
                let mut next = content.to_owned();
                next.pop();
                next
            }
        }
    }
}

/// Mapping from key to edit action, built once per buffer
#[derive(Debug, Clone)]
pub struct KeyMap {
    actions: HashMap<KeyCode, KeyAction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyMap {
    /// An empty table; every key is ignored
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// The standard text-entry table
    ///
    /// - `A`..`Z`: the letter, lowercase unless shift is held
    /// - `D0`..`D9` and `NumPad0`..`NumPad9`: the digit, shift ignored
    /// - `Back`: remove the last character
    pub fn standard() -> Self {
        let mut map = Self::empty();

        for key in KeyCode::LETTERS {
            let upper = char::from(key.code());
            map.insert(
                key,
                KeyAction::AppendFixedChar {
                    lower: upper.to_ascii_lowercase(),
                    upper,
                },
            );
        }

        let digit_rows = KeyCode::DIGITS.into_iter().zip(KeyCode::NUMPAD_DIGITS);
        for ((main, keypad), digit) in digit_rows.zip(b'0'..=b'9') {
            let digit = char::from(digit);
            map.insert(main, KeyAction::AppendDigit(digit));
            map.insert(keypad, KeyAction::AppendDigit(digit));
        }

        map.insert(KeyCode::Back, KeyAction::Backspace);
        map
    }

    /// Map `key` to `action`, replacing any previous entry
    pub fn insert(&mut self, key: KeyCode, action: KeyAction) {
        self.actions.insert(key, action);
    }

    /// Action for `key`, if mapped
    pub fn get(&self, key: KeyCode) -> Option<KeyAction> {
        self.actions.get(&key).copied()
    }

    /// Whether `key` is mapped
    pub fn contains(&self, key: KeyCode) -> bool {
        self.actions.contains_key(&key)
    }

    /// Number of mapped keys
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no key is mapped
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
