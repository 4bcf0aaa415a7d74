use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// One entry of an `ActiveList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    /// Short marker drawn after the label, e.g. an unsaved flag
    pub badge: Option<&'static str>,
}

/// Selectable menu where exactly one entry is active
pub struct ActiveList<'a> {
    pub title: &'a str,
    pub entries: &'a [ListEntry],
    pub active: usize,
    pub focused: bool,
}

impl ActiveList<'_> {
    /// Index reached by moving `delta` steps from `active`, wrapping at both ends
    pub fn step(active: usize, len: usize, delta: isize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as isize;
        let next = (active as isize + delta).rem_euclid(len);
        Some(next as usize)
    }
}

impl Widget for ActiveList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let mut spans = vec![Span::raw(entry.label.clone())];
                if let Some(badge) = entry.badge {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(badge, Style::default().fg(Color::Yellow)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title)
                    .border_style(border_style),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if !self.entries.is_empty() {
            state.select(Some(self.active.min(self.entries.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
