use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Types a phrase out one character at a time, holds it, deletes it and moves
/// on to the next phrase.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    current: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            current: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.current).copied().unwrap_or_default()
    }

    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return HOLD_DELAY;
        }
        let len = self.phrase().chars().count();
        if self.deleting {
            if self.shown > 0 {
                self.shown -= 1;
                return DELETE_DELAY;
            }
            self.deleting = false;
            self.current = (self.current + 1) % self.phrases.len();
            return TYPE_DELAY;
        }
        if self.shown < len {
            self.shown += 1;
        }
        if self.shown == len {
            self.deleting = true;
            return HOLD_DELAY;
        }
        TYPE_DELAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_deletes_and_rotates() {
        let mut tw = Typewriter::new(&["ab", "xyz"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "");

        // empty: switch phrase
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert!(!tw.is_deleting());
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(&["a", "b"]);
        let mut seen = Vec::new();
        for _ in 0..12 {
            tw.tick();
            let text = tw.text();
            if tw.is_deleting() && !text.is_empty() && seen.last() != Some(&text) {
                seen.push(text);
            }
        }
        assert_eq!(&seen[..3], &["a", "b", "a"]);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new(&["né"]);
        tw.tick();
        assert_eq!(tw.text(), "n");
        tw.tick();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "");
    }
}
