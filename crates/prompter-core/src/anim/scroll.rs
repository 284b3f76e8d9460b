//! Eased scroll-offset sequences
//!
//! A scroll sequence yields frame-paced offsets from `from` to `to` shaped
//! by the configured easing curve. A non-positive distance degenerates to a
//! single terminal step.

use std::time::Duration;

use crate::config::EasingType;

use super::timing::{frame_count, frame_interval, lerp, step_fraction};

/// One element of a scroll sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    /// Scroll offset at this step
    pub offset: f32,
    /// Fraction of the scroll duration elapsed, in [0, 1]
    pub elapsed_fraction: f64,
}

impl ScrollStep {
    /// True when the target offset has been reached
    #[inline]
    pub fn is_final(&self) -> bool {
        self.elapsed_fraction >= 1.0
    }
}

/// Produces eased scroll sequences at a fixed frame rate
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimator {
    fps: u16,
    easing: EasingType,
}

impl ScrollAnimator {
    pub fn new(fps: u16, easing: EasingType) -> Self {
        Self { fps, easing }
    }

    /// Build a scroll sequence from `from` to `to` over `duration`
    pub fn scroll(&self, from: f32, to: f32, duration: Duration) -> ScrollSequence {
        if to <= from {
            // Degenerate: nothing to travel, a single terminal step
            return ScrollSequence {
                from,
                to: to.max(0.0),
                easing: self.easing,
                steps: 1,
                emitted: 0,
                interval: Duration::ZERO,
            };
        }
        let steps = frame_count(duration, self.fps);
        ScrollSequence {
            from,
            to,
            easing: self.easing,
            steps,
            emitted: 0,
            interval: frame_interval(duration, steps),
        }
    }
}

/// Finite iterator of scroll steps
#[derive(Debug, Clone)]
pub struct ScrollSequence {
    from: f32,
    to: f32,
    easing: EasingType,
    steps: usize,
    emitted: usize,
    interval: Duration,
}

impl ScrollSequence {
    /// Time the consumer should wait between consecutive steps
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for ScrollSequence {
    type Item = ScrollStep;

    fn next(&mut self) -> Option<ScrollStep> {
        if self.emitted >= self.steps {
            return None;
        }
        let index = self.emitted;
        self.emitted += 1;

        let fraction = step_fraction(index, self.steps);
        Some(ScrollStep {
            offset: lerp(self.from, self.to, self.easing.apply(fraction)),
            elapsed_fraction: fraction,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScrollSequence {}
