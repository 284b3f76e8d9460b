use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Input bar for submitting new texts to the presenter
pub struct InputBarWidget;

impl InputBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" New text (Enter to present, Esc to quit) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(app.input.clone());
        frame.render_widget(paragraph, inner_area);

        // Place the cursor after the typed text
        let cursor_x = inner_area.x
            + (app.input.width() as u16).min(inner_area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner_area.y));
    }
}
