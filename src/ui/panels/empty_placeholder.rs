use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Centered message shown when a page has nothing to display
pub struct EmptyPlaceholder<'a> {
    pub phrase: Vec<Line<'a>>,
}

impl Widget for EmptyPlaceholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top_padding = area.height.saturating_sub(self.phrase.len() as u16 + 2) / 2;
        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
        lines.extend(self.phrase);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
