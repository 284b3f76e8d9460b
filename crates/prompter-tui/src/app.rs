use prompter_core::PresenterEvent;

/// Application state for the prompter terminal UI
pub struct App {
    /// Currently visible portion of the presented text
    pub visible_text: String,
    /// Reveal progress of the visible text, in [0, 1]
    pub reveal_fraction: f64,
    /// Auto-scroll offset in lines
    pub scroll_offset: f32,
    /// Text being typed into the input bar
    pub input: String,
    /// Status message (faults, hints)
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            visible_text: String::new(),
            reveal_fraction: 0.0,
            scroll_offset: 0.0,
            input: String::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Apply a controller event to the view state
    pub fn apply_event(&mut self, event: PresenterEvent) {
        match event {
            PresenterEvent::TextRevealed { visible, fraction } => {
                self.visible_text = visible;
                self.reveal_fraction = fraction;
                // A reveal step obsoletes any scroll position from the
                // previous sequence
                self.scroll_offset = 0.0;
            }
            PresenterEvent::ScrollMoved { offset, .. } => {
                self.scroll_offset = offset;
            }
            PresenterEvent::Fault { stage, message } => {
                self.status_message = Some(format!("{stage}: {message}"));
            }
        }
    }

    /// Append a character to the input bar
    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the input bar
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Take the input buffer for submission, leaving it empty
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
