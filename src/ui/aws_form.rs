// Field editor for a single AWS profile
use crate::models::AwsProfile;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    AccessKeyId,
    SecretAccessKey,
    RegionName,
    AvailabilityZone,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::AccessKeyId,
        Field::SecretAccessKey,
        Field::RegionName,
        Field::AvailabilityZone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Profile name",
            Field::AccessKeyId => "Access key ID",
            Field::SecretAccessKey => "Secret access key",
            Field::RegionName => "Region",
            Field::AvailabilityZone => "Availability zone",
        }
    }

    pub fn value<'p>(&self, profile: &'p AwsProfile) -> &'p str {
        match self {
            Field::Name => &profile.name,
            Field::AccessKeyId => &profile.access_key_id,
            Field::SecretAccessKey => &profile.secret_access_key,
            Field::RegionName => &profile.region_name,
            Field::AvailabilityZone => &profile.availability_zone,
        }
    }

    fn value_mut<'p>(&self, profile: &'p mut AwsProfile) -> &'p mut String {
        match self {
            Field::Name => &mut profile.name,
            Field::AccessKeyId => &mut profile.access_key_id,
            Field::SecretAccessKey => &mut profile.secret_access_key,
            Field::RegionName => &mut profile.region_name,
            Field::AvailabilityZone => &mut profile.availability_zone,
        }
    }

    fn position(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Field {
        Field::ALL[(self.position() + 1) % Field::ALL.len()]
    }

    pub fn previous(&self) -> Field {
        Field::ALL[(self.position() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Which field has focus while the form is being edited
#[derive(Debug, Clone, Default)]
pub struct AwsFormState {
    pub field: Field,
}

impl AwsFormState {
    /// Apply an editing key to `profile`.
    ///
    /// Returns the edited copy when the key changed a value. Persisted
    /// profiles are read-only and never produce an edit.
    pub fn edit(&mut self, profile: &AwsProfile, key: KeyEvent) -> Option<AwsProfile> {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.field = self.field.previous();
                None
            }
            KeyCode::Down => {
                self.field = self.field.next();
                None
            }
            _ if profile.is_persisted() => None,
            KeyCode::Backspace => {
                let mut edited = profile.clone();
                self.field.value_mut(&mut edited).pop()?;
                Some(edited)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut edited = profile.clone();
                self.field.value_mut(&mut edited).push(c);
                Some(edited)
            }
            _ => None,
        }
    }
}

pub struct AwsForm<'a> {
    pub data: &'a AwsProfile,
    pub state: &'a AwsFormState,
    pub focused: bool,
}

impl Widget for AwsForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let read_only = self.data.is_persisted();
        let mut lines = Vec::new();

        for field in Field::ALL {
            let is_current = self.focused && field == self.state.field;
            let value = if field == Field::SecretAccessKey && !(is_current && !read_only) {
                self.data.masked_secret()
            } else {
                field.value(self.data).to_string()
            };

            let label_style = if is_current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let cursor = if is_current && !read_only { "█" } else { "" };

            lines.push(Line::from(vec![
                Span::styled(format!("{:<18}", field.label()), label_style),
                Span::raw(value),
                Span::raw(cursor),
            ]));
        }

        lines.push(Line::from(""));
        if let Some(created) = self.data.created {
            lines.push(Line::from(Span::styled(
                format!("Saved {}", created.format("%Y-%m-%d %H:%M UTC")),
                Style::default().fg(Color::Gray),
            )));
        }
        if read_only {
            lines.push(Line::from(Span::styled(
                "Saved profiles are read-only",
                Style::default().fg(Color::Gray),
            )));
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} [{}]", self.data.name, self.data.status().as_str()))
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
