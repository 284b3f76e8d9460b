//! Updates emitted by the controller for the renderer to apply

/// Events emitted by the controller to notify the renderer of changes
///
/// The renderer applies these to its view state; it is never blocked by the
/// controller and receives no event from a superseded sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    /// A new prefix of the current text became visible
    TextRevealed { visible: String, fraction: f64 },
    /// The auto-scroll offset moved
    ScrollMoved { offset: f32, fraction: f64 },
    /// A sequence was cut short by a fault (already logged)
    Fault { stage: String, message: String },
}
