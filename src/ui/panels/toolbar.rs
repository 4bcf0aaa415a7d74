use crate::models::User;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Preference pages reachable from the breadcrumb, in display order
const PAGES: [&str; 4] = ["User", "Cluster", "EC2", "Volumes"];
/// Extra pages only administrators see
const ADMIN_PAGES: [&str; 2] = ["Groups", "Status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub paths: Vec<&'static str>,
    /// Index of the current page in `paths`, if present
    pub active: Option<usize>,
}

/// Breadcrumb for the preference pages with `active` highlighted
pub fn breadcrumb(user: Option<&User>, active: &str) -> Breadcrumb {
    let mut paths: Vec<&'static str> = PAGES.to_vec();
    if user.map(|u| u.admin).unwrap_or(false) {
        paths.extend(ADMIN_PAGES);
    }
    let active = paths.iter().position(|p| *p == active);
    Breadcrumb { paths, active }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarAction {
    pub name: &'static str,
    pub icon: &'static str,
    pub key: char,
}

/// Header row: title, breadcrumb and page-level actions
pub struct Toolbar<'a> {
    pub breadcrumb: &'a Breadcrumb,
    pub title: &'a str,
    pub actions: &'a [ToolbarAction],
    pub user: Option<&'a User>,
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            "Preferences",
            Style::default().fg(Color::Gray),
        )];
        for (i, path) in self.breadcrumb.paths.iter().enumerate() {
            spans.push(Span::raw(" › "));
            let style = if Some(i) == self.breadcrumb.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(*path, style));
        }

        for action in self.actions {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("{} {} ({})", action.icon, action.name, action.key),
                Style::default().fg(Color::Green),
            ));
        }

        let mut block = Block::default().borders(Borders::ALL).title(Span::styled(
            self.title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(user) = self.user {
            block = block.title_bottom(Line::from(user.login.clone()).right_aligned());
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
