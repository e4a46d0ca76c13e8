//! Profession ticker for the home hero line.
//!
//! Pure state machine: each `tick` advances one character and reports
//! how long to wait before the next tick. The UI drives it on a timer
//! task; tests drive it directly.

/// Delay before the first tick.
pub const START_DELAY_MS: u64 = 1000;

/// Per-character delay while typing forward.
pub const TYPE_DELAY_MS: u64 = 200;

/// Per-character delay while deleting.
pub const DELETE_DELAY_MS: u64 = 100;

/// Hold once a phrase is fully typed.
pub const HOLD_DELAY_MS: u64 = 2000;

/// Pause after a phrase is fully deleted, before the next one.
pub const NEXT_PHRASE_DELAY_MS: u64 = 500;

/// One rendered frame of the ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingFrame {
    /// Text to display
    pub text: String,
    /// How long to wait before the next tick
    pub next_delay_ms: u64,
}

/// Cycles through a phrase list, typing and deleting character by
/// character.
#[derive(Debug, Clone)]
pub struct TypingTicker {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypingTicker {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance one character and return the frame to display.
    pub fn tick(&mut self) -> TypingFrame {
        let Some(current) = self.phrases.get(self.phrase) else {
            return TypingFrame {
                text: String::new(),
                next_delay_ms: HOLD_DELAY_MS,
            };
        };
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.chars().take(self.chars).collect();

        let next_delay_ms = if !self.deleting && self.chars == len {
            self.deleting = true;
            HOLD_DELAY_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            NEXT_PHRASE_DELAY_MS
        } else if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        TypingFrame {
            text,
            next_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(phrases: &[&str]) -> TypingTicker {
        TypingTicker::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_forward_then_holds() {
        let mut t = ticker(&["Hi"]);
        assert_eq!(
            t.tick(),
            TypingFrame {
                text: "H".to_string(),
                next_delay_ms: TYPE_DELAY_MS
            }
        );
        assert_eq!(
            t.tick(),
            TypingFrame {
                text: "Hi".to_string(),
                next_delay_ms: HOLD_DELAY_MS
            }
        );
    }

    #[test]
    fn test_deletes_then_moves_to_next_phrase() {
        let mut t = ticker(&["ab", "cd"]);
        t.tick();
        t.tick(); // "ab" fully typed
        assert_eq!(t.tick().text, "a");
        let frame = t.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.next_delay_ms, NEXT_PHRASE_DELAY_MS);
        assert_eq!(t.tick().text, "c");
    }

    #[test]
    fn test_wraps_around_the_phrase_list() {
        let mut t = ticker(&["a", "b"]);
        let mut seen = Vec::new();
        for _ in 0..8 {
            seen.push(t.tick().text);
        }
        assert!(seen.contains(&"a".to_string()));
        assert!(seen.contains(&"b".to_string()));
    }

    #[test]
    fn test_multibyte_phrases_slice_on_char_boundaries() {
        let mut t = ticker(&["héllo"]);
        assert_eq!(t.tick().text, "h");
        assert_eq!(t.tick().text, "hé");
        assert_eq!(t.tick().text, "hél");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut t = ticker(&[]);
        assert_eq!(t.tick().text, "");
        assert_eq!(t.tick().text, "");
    }
}
