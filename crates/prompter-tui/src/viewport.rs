//! Terminal-backed implementation of the measurement boundary
//!
//! The render pass records the wrapped content height and the panel height;
//! the controller reads the difference back as the scrollable distance.

use std::sync::{Mutex, MutexGuard, PoisonError};

use prompter_core::{Result, Viewport};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default)]
struct Geometry {
    content_lines: u16,
    viewport_lines: u16,
}

/// Viewport geometry measured from the last rendered frame
#[derive(Debug, Default)]
pub struct TermViewport {
    geometry: Mutex<Geometry>,
}

impl TermViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record geometry observed during a render pass
    pub fn record(&self, content_lines: u16, viewport_lines: u16) {
        let mut geometry = self.lock_geometry();
        geometry.content_lines = content_lines;
        geometry.viewport_lines = viewport_lines;
    }

    fn lock_geometry(&self) -> MutexGuard<'_, Geometry> {
        self.geometry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Viewport for TermViewport {
    fn scrollable_distance(&self) -> Result<f32> {
        let geometry = self.lock_geometry();
        Ok(geometry.content_lines.saturating_sub(geometry.viewport_lines) as f32)
    }
}

/// Wrapped line count of `text` at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    let mut lines = 0u16;
    for line in text.lines() {
        if line.is_empty() {
            lines += 1;
        } else {
            lines += ((line.width() + width - 1) / width) as u16;
        }
    }
    lines.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_overflow_in_lines() {
        let viewport = TermViewport::new();
        viewport.record(30, 10);
        assert_eq!(viewport.scrollable_distance().unwrap(), 20.0);
    }

    #[test]
    fn test_no_overflow_clamps_to_zero() {
        let viewport = TermViewport::new();
        viewport.record(5, 10);
        assert_eq!(viewport.scrollable_distance().unwrap(), 0.0);
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("hello", 10), 1);
        assert_eq!(wrapped_height("hello world", 5), 3);
        assert_eq!(wrapped_height("a\n\nb", 10), 3);
        assert_eq!(wrapped_height("", 10), 1);
    }

    #[test]
    fn test_wrapped_height_wide_chars() {
        // CJK characters are two columns wide
        assert_eq!(wrapped_height("你好你好", 4), 2);
    }
}
