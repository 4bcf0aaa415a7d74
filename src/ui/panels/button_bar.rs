use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A button bound to a named form action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Symbolic action name handed back to the owner when triggered
    pub name: &'static str,
    pub label: &'static str,
    pub key: &'static str,
    pub disabled: bool,
}

/// Row of action buttons with an inline error message
pub struct ButtonBar<'a> {
    pub visible: bool,
    pub error: Option<&'a str>,
    pub actions: &'a [ButtonSpec],
}

impl Widget for ButtonBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }

        let mut spans = Vec::new();
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if action.disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(
                format!("[{}] {}", action.key, action.label),
                style,
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
