//! Presentation orchestration
//!
//! The controller accepts a stream of text updates, debounces them, and
//! drives the typewriter reveal followed (on overflow) by a timed
//! auto-scroll. Correctness under rapid updates rests on a single monotonic
//! generation counter: every asynchronous step captures the generation it
//! was scheduled under and re-checks it on resume, so work superseded by a
//! newer text never touches observable state.
//!
//! - `state` - Controller-owned state and the `Phase` enum
//! - `events` - Updates emitted to the rendering collaborator
//! - `viewport` - Measurement boundary for overflow detection
//! - `controller` - The orchestrator

pub mod controller;
pub mod events;
pub mod state;
pub mod viewport;

pub use controller::PresentationController;
pub use events::PresenterEvent;
pub use state::{Phase, PresentationState};
pub use viewport::{FixedViewport, Viewport};
