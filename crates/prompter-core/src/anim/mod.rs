//! Animation primitives for the presentation engine
//!
//! The animators here are pure: they produce finite, lazily evaluated step
//! sequences and own no timers. The consumer paces a sequence by waiting
//! `frame_interval()` between steps and may abandon it at any point.
//!
//! - `easing` - Pure easing functions (linear, cubic, quintic)
//! - `timing` - Step fraction and interpolation utilities
//! - `reveal` - Character-by-character typewriter sequences
//! - `scroll` - Eased scroll-offset sequences

pub mod easing;
pub mod reveal;
pub mod scroll;
pub mod timing;

pub use reveal::{RevealStep, TextRevealAnimator};
pub use scroll::{ScrollAnimator, ScrollStep};
