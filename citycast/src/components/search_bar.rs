//! City input, submit button and the error line

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city...";
pub const BUTTON_IDLE: &str = "Search";
pub const BUTTON_LOADING: &str = "Loading...";

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub error: Option<&'a str>,
    pub is_loading: bool,
    pub is_focused: bool,
}

/// Single-line query editor
///
/// Edits are emitted as `QueryChange` with the whole new text; Enter emits
/// `WeatherFetch` unless a lookup is already running.
pub struct SearchBar {
    /// Cursor position (byte index into the query)
    cursor: usize,
}

impl Default for SearchBar {
    /// Cursor starts at the end of whatever query is already present
    fn default() -> Self {
        Self { cursor: usize::MAX }
    }
}

impl SearchBar {
    /// Input box (3) + error line (1)
    pub const HEIGHT: u16 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_left(&mut self, value: &str) {
        if let Some((idx, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    fn move_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let EventKind::Key(key) = event else {
            return vec![];
        };

        self.clamp_cursor(props.query);
        let value = props.query;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    if value.is_empty() {
                        vec![]
                    } else {
                        vec![Action::QueryChange(String::new())]
                    }
                }
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    vec![]
                }
                KeyCode::Char('e') => {
                    self.cursor = value.len();
                    vec![]
                }
                _ => vec![],
            };
        }

        match key.code {
            KeyCode::Char(c) => vec![Action::QueryChange(self.insert_char(value, c))],
            KeyCode::Backspace => self
                .delete_before(value)
                .map(Action::QueryChange)
                .into_iter()
                .collect(),
            KeyCode::Delete => self
                .delete_at(value)
                .map(Action::QueryChange)
                .into_iter()
                .collect(),
            KeyCode::Left => {
                self.move_left(value);
                vec![]
            }
            KeyCode::Right => {
                self.move_right(value);
                vec![]
            }
            KeyCode::Home => {
                self.cursor = 0;
                vec![]
            }
            KeyCode::End => {
                self.cursor = value.len();
                vec![]
            }
            // Button is disabled while loading
            KeyCode::Enter if !props.is_loading => vec![Action::WeatherFetch],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.query);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(area);
        let cols = Layout::horizontal([Constraint::Min(10), Constraint::Length(14)]).split(rows[0]);

        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let (text, text_style) = if props.query.is_empty() {
            (PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            (props.query, Style::default().fg(Color::White))
        };
        let input = Paragraph::new(text).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, cols[0]);

        let (label, label_style) = if props.is_loading {
            (BUTTON_LOADING, Style::default().fg(Color::DarkGray))
        } else {
            (BUTTON_IDLE, Style::default().fg(Color::Cyan).bold())
        };
        let button = Paragraph::new(label)
            .style(label_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, cols[1]);

        if let Some(error) = props.error {
            let line = Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )]);
            frame.render_widget(Paragraph::new(line), rows[1]);
        }

        if props.is_focused && !props.is_loading {
            let offset = u16::try_from(props.query[..self.cursor].chars().count())
                .unwrap_or(u16::MAX);
            let cursor_x = cols[0].x.saturating_add(1).saturating_add(offset);
            let max_x = cols[0].x.saturating_add(cols[0].width.saturating_sub(1));
            if cursor_x < max_x {
                frame.set_cursor_position((cursor_x, cols[0].y + 1));
            }
        }
    }
}
