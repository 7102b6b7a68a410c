//! Text buffer with held-key repeat
//!
//! [`InputBuffer`] turns one keyboard snapshot per frame into edits of its
//! text. A newly pressed key applies immediately; holding it applies again
//! each time more than [`KEY_REPEAT_THRESHOLD`] seconds have passed since the
//! last application. Releasing every key cancels the repeat.
//!
//! Only one key is handled per frame. When several non-modifier keys are
//! down, the one with the lowest key code wins; the rest are ignored. This
//! is a known limitation of the single-held-key model, not an error.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::config::TextFieldConfig;
use crate::error::TextFieldError;
use crate::events::{SubscriptionId, TextChangedEvent, TextChangedHandler, TextEventDispatcher};
use crate::input::{KeyCode, KeyMap, KeyboardState};

/// Default maximum number of characters
pub const DEFAULT_MAX_LENGTH: usize = 15;

/// Seconds a key must stay held before it repeats
pub const KEY_REPEAT_THRESHOLD: f64 = 0.2;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`InputBuffer`], unique for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    fn next() -> Self {
        Self(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Text content plus the key-repeat state machine that edits it
#[derive(Debug)]
pub struct InputBuffer {
    id: BufferId,
    content: String,
    max_length: usize,
    held_key: Option<KeyCode>,
    last_event_time: f64,
    key_map: KeyMap,
    revision: u64,
    enabled: bool,
    listeners: TextEventDispatcher,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Create an empty buffer with the default maximum length
    pub fn new() -> Self {
        Self {
            id: BufferId::next(),
            content: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
            held_key: None,
            last_event_time: 0.0,
            key_map: KeyMap::standard(),
            revision: 0,
            enabled: true,
            listeners: TextEventDispatcher::new(),
        }
    }

    /// Create a buffer holding `starting_text`, default maximum length
    pub fn with_text(starting_text: impl Into<String>) -> Result<Self, TextFieldError> {
        Self::with_max_length(starting_text, DEFAULT_MAX_LENGTH)
    }

    /// Create a buffer holding `starting_text` that accepts at most
    /// `max_length` characters
    pub fn with_max_length(
        starting_text: impl Into<String>,
        max_length: usize,
    ) -> Result<Self, TextFieldError> {
        if max_length == 0 {
            return Err(TextFieldError::InvalidMaxLength);
        }

        let content = starting_text.into();
        let length = content.chars().count();
        if length > max_length {
            return Err(TextFieldError::StartingTextTooLong { length, max_length });
        }

        Ok(Self {
            content,
            max_length,
            ..Self::new()
        })
    }

    /// Create a buffer from the text settings of a configuration
    pub fn from_config(config: &TextFieldConfig) -> Result<Self, TextFieldError> {
        Self::with_max_length(config.starting_text.clone(), config.max_length)
    }

    /// Replace the key table (builder pattern)
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Process one frame of keyboard input
    ///
    /// # Arguments
    /// * `keys` - Keys down this frame, plus the shift flag
    /// * `now` - Monotonic frame time in seconds
    pub fn update(&mut self, keys: &KeyboardState, now: f64) {
        if !self.enabled {
            return;
        }

        let Some(key) = keys.lowest_pressed() else {
            // Nothing typed this frame: any repeat is cancelled
            self.release();
            return;
        };

        let shift = keys.shift_held();

        if self.held_key == Some(key) {
            let elapsed = now - self.last_event_time;
            if elapsed > KEY_REPEAT_THRESHOLD {
                log::trace!("Repeating held key {:?} after {:.3}s", key, elapsed);
                self.apply_key(key, shift, now);
            }
        } else if self.key_map.contains(key) {
            log::trace!("Fresh press of {:?}", key);
            self.held_key = Some(key);
            self.apply_key(key, shift, now);
        } else {
            log::trace!("Ignoring unmapped key {:?}", key);
        }
    }

    fn release(&mut self) {
        self.held_key = None;
        self.last_event_time = 0.0;
    }

    fn apply_key(&mut self, key: KeyCode, shift: bool, now: f64) {
        self.last_event_time = now;

        let Some(action) = self.key_map.get(key) else {
            return;
        };

        let candidate = action.apply(&self.content, shift);
        let length = candidate.chars().count();
        if length > self.max_length {
            log::debug!(
                "Rejected {:?}: {} characters exceeds maximum of {}",
                key,
                length,
                self.max_length
            );
            return;
        }

        // Deliberately silent: backspace on empty text is not a change, and
        // the revision and subscribers track changes only
        if candidate == self.content {
            return;
        }

        self.commit(candidate, now);
    }

    fn commit(&mut self, text: String, now: f64) {
        self.content = text;
        self.revision += 1;
        log::debug!("Text changed to '{}' (revision {})", self.content, self.revision);

        let event = TextChangedEvent {
            text: self.content.clone(),
            revision: self.revision,
            timestamp: now,
        };
        self.listeners.dispatch(&event);
    }

    /// Replace the content programmatically
    ///
    /// Subscribers are notified as for a keystroke. Text longer than the
    /// maximum is rejected and the buffer left unchanged.
    pub fn set_text(&mut self, text: impl Into<String>, now: f64) -> Result<(), TextFieldError> {
        let text = text.into();
        let length = text.chars().count();
        if length > self.max_length {
            return Err(TextFieldError::TextTooLong {
                length,
                max_length: self.max_length,
            });
        }

        if text != self.content {
            self.commit(text, now);
        }
        Ok(())
    }

    /// Empty the buffer
    pub fn clear(&mut self, now: f64) {
        if !self.content.is_empty() {
            self.commit(String::new(), now);
        }
    }

    /// Register a handler for text changes
    pub fn subscribe(&mut self, handler: impl TextChangedHandler + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(handler))
    }

    /// Remove a previously registered handler
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Enable or disable keyboard handling
    ///
    /// Disabling also drops any held key, so re-enabling starts fresh.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.release();
        }
        self.enabled = enabled;
    }

    /// Whether keyboard handling is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Identity of this buffer
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Current length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Maximum length in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Key currently treated as held for repeat
    pub fn held_key(&self) -> Option<KeyCode> {
        self.held_key
    }

    /// Time of the last applied keystroke or repeat (0 when released)
    pub fn last_event_time(&self) -> f64 {
        self.last_event_time
    }

    /// Change counter, incremented once per content change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Key table in use
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }
}
