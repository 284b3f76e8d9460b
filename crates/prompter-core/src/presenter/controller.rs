//! The presentation controller
//!
//! Sequences debounce -> reveal -> settle -> overflow scroll for the most
//! recently set text, cancelling superseded work through a generation
//! counter checked at every suspension point.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::anim::{ScrollAnimator, TextRevealAnimator};
use crate::config::PresenterConfig;

use super::events::PresenterEvent;
use super::state::{Phase, PresentationState};
use super::viewport::Viewport;

/// Orchestrates the debounced typewriter reveal and overflow auto-scroll
///
/// `set_text` never blocks and never fails. Each accepted call increments
/// the generation counter and spawns a fresh driver task; the bumped
/// counter silently voids every wait still in flight from older calls, and
/// the superseded driver is additionally aborted so its timers do not
/// linger. Rapid successive calls therefore converge on the last text: no
/// stale sequence ever applies an observable mutation.
///
/// Must be used from within a tokio runtime.
pub struct PresentationController {
    inner: Arc<Inner>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    config: PresenterConfig,
    state: Mutex<PresentationState>,
    viewport: Arc<dyn Viewport>,
    events: mpsc::UnboundedSender<PresenterEvent>,
}

impl PresentationController {
    pub fn new(
        config: PresenterConfig,
        viewport: Arc<dyn Viewport>,
        events: mpsc::UnboundedSender<PresenterEvent>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                state: Mutex::new(PresentationState::default()),
                viewport,
                events,
            }),
            driver: Mutex::new(None),
        }
    }

    /// Accept a new text to present
    ///
    /// Empty text clears the display immediately, skipping the debounce.
    /// Any other text starts a debounced presentation sequence that
    /// supersedes whatever is in flight.
    pub fn set_text(&self, text: &str) {
        let generation = {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            let generation = state.generation;

            if text.is_empty() {
                state.pending_text = None;
                state.current_text.clear();
                state.phase = Phase::Idle;
                drop(state);
                self.abort_driver();
                debug!(generation, "display cleared");
                self.inner.send_event(PresenterEvent::TextRevealed {
                    visible: String::new(),
                    fraction: 1.0,
                });
                return;
            }

            state.pending_text = Some(text.to_string());
            state.phase = Phase::Debouncing;
            generation
        };
        debug!(generation, len = text.len(), "text accepted");

        self.abort_driver();
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            inner.drive(generation).await;
        });
        *self.lock_driver() = Some(handle);
    }

    /// Cancel all scheduled work and return to idle
    ///
    /// Increments the generation so any callback still in flight becomes a
    /// no-op, in addition to aborting the driver task outright.
    pub fn dispose(&self) {
        {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            state.pending_text = None;
            state.phase = Phase::Idle;
        }
        self.abort_driver();
        debug!("controller disposed");
    }

    /// Stage of the sequence currently active
    pub fn phase(&self) -> Phase {
        self.inner.lock_state().phase
    }

    /// Current value of the generation counter
    pub fn generation(&self) -> u64 {
        self.inner.lock_state().generation
    }

    /// Text most recently committed to the display
    pub fn current_text(&self) -> String {
        self.inner.lock_state().current_text.clone()
    }

    fn abort_driver(&self) {
        if let Some(handle) = self.lock_driver().take() {
            handle.abort();
        }
    }

    fn lock_driver(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PresentationController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Inner {
    fn lock_state(&self) -> MutexGuard<'_, PresentationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn send_event(&self, event: PresenterEvent) {
        if self.events.send(event).is_err() {
            warn!("failed to send presenter event: receiver dropped");
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock_state().generation == generation
    }

    /// Set the phase if `generation` is still current; false means stale
    fn set_phase_if_current(&self, generation: u64, phase: Phase) -> bool {
        let mut state = self.lock_state();
        if state.generation != generation {
            return false;
        }
        state.phase = phase;
        true
    }

    /// Run one generation's sequence: debounce, reveal, settle, scroll
    ///
    /// Every await is followed by a staleness check; a superseded
    /// generation returns without touching observable state. Guard order
    /// holds throughout: no state lock is held across an await.
    async fn drive(&self, generation: u64) {
        sleep(self.config.debounce()).await;

        // Commit the pending text
        let text = {
            let mut state = self.lock_state();
            if state.generation != generation {
                debug!(generation, "debounce superseded");
                return;
            }
            let Some(text) = state.pending_text.take() else {
                return;
            };
            state.current_text = text.clone();
            state.phase = Phase::Revealing;
            text
        };

        // Typewriter reveal
        let sequence =
            TextRevealAnimator::new().reveal(&text, self.config.reveal_duration(&text));
        let interval = sequence.frame_interval();
        for step in sequence {
            if !self.is_current(generation) {
                debug!(generation, "reveal superseded");
                return;
            }
            let last = step.is_final();
            self.send_event(PresenterEvent::TextRevealed {
                visible: step.visible_text,
                fraction: step.elapsed_fraction,
            });
            if !last {
                sleep(interval).await;
            }
        }

        // Settle before deciding whether to scroll
        if !self.set_phase_if_current(generation, Phase::Overflowing) {
            return;
        }
        sleep(self.config.settle()).await;

        {
            let state = self.lock_state();
            if state.generation != generation {
                debug!(generation, "settle superseded");
                return;
            }
            if state.current_text == self.config.default_text {
                drop(state);
                self.set_phase_if_current(generation, Phase::Idle);
                return;
            }
        }

        let distance = match self.viewport.scrollable_distance() {
            Ok(distance) => distance,
            Err(e) => {
                warn!(generation, error = %e, "viewport measurement failed, skipping scroll");
                self.send_event(PresenterEvent::Fault {
                    stage: "measure".to_string(),
                    message: e.to_string(),
                });
                0.0
            }
        };
        if distance <= 0.0 {
            self.set_phase_if_current(generation, Phase::Idle);
            return;
        }

        // Overflow auto-scroll
        if !self.set_phase_if_current(generation, Phase::ScrollingBack) {
            return;
        }
        let sequence = ScrollAnimator::new(self.config.animation_fps, self.config.easing)
            .scroll(0.0, distance, self.config.scroll_duration(distance));
        let interval = sequence.frame_interval();
        for step in sequence {
            if !self.is_current(generation) {
                debug!(generation, "scroll superseded");
                return;
            }
            let last = step.is_final();
            self.send_event(PresenterEvent::ScrollMoved {
                offset: step.offset,
                fraction: step.elapsed_fraction,
            });
            if !last {
                sleep(interval).await;
            }
        }

        self.set_phase_if_current(generation, Phase::Idle);
        debug!(generation, "sequence complete");
    }
}
