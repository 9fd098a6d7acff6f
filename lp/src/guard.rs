//! Topic input length guard
//!
//! Over-long input is corrected by truncation, never rejected. Each edit
//! that crosses or continues past the limit signals one warning.

/// Maximum topic length in characters (not bytes)
pub const TOPIC_MAX_CHARS: usize = 200;

/// Holds the current topic text, clamped to [`TOPIC_MAX_CHARS`]
#[derive(Debug, Clone, Default)]
pub struct TopicInput {
    value: String,
}

impl TopicInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the topic with `text`, truncating to exactly
    /// [`TOPIC_MAX_CHARS`] characters when over the limit.
    ///
    /// Returns `true` when this edit truncated, so the caller can surface
    /// the warning once per exceeding edit.
    pub fn assign(&mut self, text: &str) -> bool {
        match text.char_indices().nth(TOPIC_MAX_CHARS) {
            Some((boundary, _)) => {
                self.value = text[..boundary].to_string();
                true
            }
            None => {
                self.value = text.to_string();
                false
            }
        }
    }

    /// Current topic text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the guard, yielding the clamped topic
    pub fn into_value(self) -> String {
        self.value
    }

    /// Character count of the current value, for "n/200" style display
    pub fn chars_used(&self) -> usize {
        self.value.chars().count()
    }
}
