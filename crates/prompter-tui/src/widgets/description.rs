use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::viewport::{wrapped_height, TermViewport};

/// The animated description panel
pub struct DescriptionWidget;

impl DescriptionWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, viewport: &TermViewport) {
        let block = Block::default()
            .title(" Description ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Feed the measurement boundary from what this frame shows
        viewport.record(
            wrapped_height(&app.visible_text, inner_area.width),
            inner_area.height,
        );

        let paragraph = Paragraph::new(app.visible_text.clone())
            .wrap(Wrap { trim: false })
            .scroll((app.scroll_offset.round() as u16, 0));

        frame.render_widget(paragraph, inner_area);
    }
}
