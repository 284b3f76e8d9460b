use prompter_core::Phase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// One-line status bar: phase, generation, and any fault message
pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, phase: Phase, generation: u64) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", phase.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Self::phase_color(phase))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" gen {}", generation)),
        ];

        if let Some(ref message) = app.status_message {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn phase_color(phase: Phase) -> Color {
        match phase {
            Phase::Idle => Color::DarkGray,
            Phase::Debouncing => Color::Yellow,
            Phase::Revealing => Color::Green,
            Phase::Overflowing => Color::Cyan,
            Phase::ScrollingBack => Color::Blue,
        }
    }
}
