//! Typewriter reveal sequences
//!
//! A reveal sequence yields one step per character, each a strict prefix of
//! the target text, with elapsed fractions linear in step index. The final
//! step is always the full text at fraction 1.0.

use std::time::Duration;

use super::timing::{frame_interval, step_fraction};

/// One element of a reveal sequence
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStep {
    /// Prefix of the target text visible at this step
    pub visible_text: String,
    /// Fraction of the reveal duration elapsed, in [0, 1]
    pub elapsed_fraction: f64,
}

impl RevealStep {
    /// True when the full text is visible
    #[inline]
    pub fn is_final(&self) -> bool {
        self.elapsed_fraction >= 1.0
    }
}

/// Produces character-by-character reveal sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRevealAnimator;

impl TextRevealAnimator {
    pub fn new() -> Self {
        Self
    }

    /// Build a reveal sequence for `text`, paced linearly over `duration`
    ///
    /// Empty text still yields a single terminal step so every reveal ends
    /// with a fraction of 1.0.
    pub fn reveal(&self, text: &str, duration: Duration) -> RevealSequence {
        RevealSequence::new(text, duration)
    }
}

/// Finite iterator of reveal steps
///
/// Byte offsets of the prefix boundaries are precomputed so stepping never
/// splits a multi-byte character.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    text: String,
    /// Byte length of the prefix after each character
    boundaries: Vec<usize>,
    emitted: usize,
    interval: Duration,
}

impl RevealSequence {
    fn new(text: &str, duration: Duration) -> Self {
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        let steps = boundaries.len().max(1);
        Self {
            text: text.to_string(),
            boundaries,
            emitted: 0,
            interval: frame_interval(duration, steps),
        }
    }

    /// Time the consumer should wait between consecutive steps
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }

    fn total(&self) -> usize {
        self.boundaries.len().max(1)
    }
}

impl Iterator for RevealSequence {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        let total = self.total();
        if self.emitted >= total {
            return None;
        }
        let index = self.emitted;
        self.emitted += 1;

        let end = self.boundaries.get(index).copied().unwrap_or(0);
        Some(RevealStep {
            visible_text: self.text[..end].to_string(),
            elapsed_fraction: step_fraction(index, total),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_prefixes() {
        let seq = TextRevealAnimator::new().reveal("Hello", Duration::from_millis(100));
        let steps: Vec<RevealStep> = seq.collect();
        let visible: Vec<&str> = steps.iter().map(|s| s.visible_text.as_str()).collect();
        assert_eq!(visible, vec!["H", "He", "Hel", "Hell", "Hello"]);
    }

    #[test]
    fn test_reveal_fractions_linear() {
        let steps: Vec<RevealStep> = TextRevealAnimator::new()
            .reveal("Hello", Duration::from_millis(100))
            .collect();
        for (i, step) in steps.iter().enumerate() {
            let expected = (i + 1) as f64 / 5.0;
            assert!((step.elapsed_fraction - expected).abs() < 0.001);
        }
        assert!(steps.last().unwrap().is_final());
    }

    #[test]
    fn test_reveal_interval() {
        let seq = TextRevealAnimator::new().reveal("Hello", Duration::from_millis(100));
        assert_eq!(seq.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_reveal_multibyte() {
        let steps: Vec<RevealStep> = TextRevealAnimator::new()
            .reveal("héllo", Duration::from_millis(100))
            .collect();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1].visible_text, "hé");
        assert_eq!(steps[4].visible_text, "héllo");
    }

    #[test]
    fn test_reveal_empty_text() {
        let steps: Vec<RevealStep> = TextRevealAnimator::new()
            .reveal("", Duration::from_millis(100))
            .collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].visible_text, "");
        assert!(steps[0].is_final());
    }

    #[test]
    fn test_reveal_abandonable() {
        let mut seq = TextRevealAnimator::new().reveal("Hello", Duration::from_millis(100));
        assert_eq!(seq.next().unwrap().visible_text, "H");
        assert_eq!(seq.len(), 4);
        // Dropping mid-sequence has no side effects to observe; a fresh
        // sequence starts from the first prefix again
        drop(seq);
        let mut fresh = TextRevealAnimator::new().reveal("Hello", Duration::from_millis(100));
        assert_eq!(fresh.next().unwrap().visible_text, "H");
    }
}
