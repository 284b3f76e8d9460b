//! Controller-owned presentation state

/// Stage of the presentation sequence currently active
///
/// Exactly one phase is active per controller at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing scheduled or running
    #[default]
    Idle,
    /// Waiting out the debounce window for the latest text
    Debouncing,
    /// Typewriter reveal in progress
    Revealing,
    /// Reveal finished; settling before the overflow check
    Overflowing,
    /// Auto-scrolling overflowed text into view
    ScrollingBack,
}

impl Phase {
    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Debouncing => "debouncing",
            Phase::Revealing => "revealing",
            Phase::Overflowing => "overflowing",
            Phase::ScrollingBack => "scrolling",
        }
    }
}

/// State owned exclusively by the controller
///
/// The generation counter is the sole ownership token: it increments once
/// per accepted `set_text` (and on dispose), and any callback holding an
/// older value must not mutate shared state.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    /// Text most recently committed to the display
    pub current_text: String,
    /// Text accepted by `set_text` but not yet past its debounce
    pub pending_text: Option<String>,
    /// Monotonic ownership token
    pub generation: u64,
    /// Active stage
    pub phase: Phase,
}
