//! The whole screen: frame, search bar, weather body, backdrop line and help
//!
//! FRAMEWORK PATTERN: Component Trait
//! - Props<'a>: Read-only data for rendering (borrowed from state)
//! - handle_event: Receives EventKind, returns `Vec<Action>`
//! - render: Pure function of props - no side effects
//! - Focus handled via props, not event context

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps,
};
use tui_dispatch::EventKind;

use crate::action::Action;
use crate::sprites;
use crate::state::AppState;

pub const TITLE: &str = "Weather App";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for WeatherPanel - read-only view of state
pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root component; owns the search bar so its cursor survives re-renders
#[derive(Default)]
pub struct WeatherPanel {
    search: SearchBar,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_props<'a>(props: &WeatherPanelProps<'a>) -> SearchBarProps<'a> {
        SearchBarProps {
            query: &props.state.query,
            error: props.state.error.as_deref(),
            is_loading: props.state.is_loading,
            is_focused: props.is_focused,
        }
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        if let EventKind::Key(key) = event {
            // The poller forwards key releases too
            if key.kind == KeyEventKind::Release {
                return vec![];
            }
            let ctrl_c = key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        let search_props = Self::search_props(&props);
        self.search.handle_event(event, search_props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.is_loading {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            " ".to_string()
        };

        // Border tint is the terminal stand-in for the background photo
        let backdrop = sprites::backdrop_color(state.category());
        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(backdrop))
            .title(format!(" ☁ {}{}", TITLE, loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Min(1),    // Weather body (centered by WeatherBody)
            Constraint::Length(1), // Background reference
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        let search_props = Self::search_props(&props);
        self.search.render(frame, chunks[0], search_props);

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state });

        let background = Line::from(vec![
            Span::styled("Background: ", Style::default().fg(Color::DarkGray)),
            Span::styled(state.background(), Style::default().fg(backdrop)),
        ]);
        frame.render_widget(Paragraph::new(background), chunks[2]);

        let mut help = HelpBar;
        help.render(frame, chunks[3], HelpBarProps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn press(k: KeyEvent) -> EventKind {
        EventKind::Key(k)
    }

    #[test]
    fn test_handle_event_quit() {
        let mut panel = WeatherPanel::new();
        let state = AppState::default();

        for k in [key("esc"), ctrl_key('c')] {
            let props = WeatherPanelProps {
                state: &state,
                is_focused: true,
            };
            let actions = panel.handle_event(&press(k), props);
            actions.assert_count(1);
            actions.assert_first(Action::Quit);
        }
    }

    #[test]
    fn test_plain_q_is_typed() {
        let mut panel = WeatherPanel::new();
        let state = AppState::with_query("Iq");
        let props = WeatherPanelProps {
            state: &state,
            is_focused: true,
        };

        let actions = panel.handle_event(&press(char_key('q')), props);
        assert_eq!(actions, vec![Action::QueryChange("Iqq".into())]);
    }

    #[test]
    fn test_handle_event_submit() {
        let mut panel = WeatherPanel::new();
        let state = AppState::with_query("Paris");
        let props = WeatherPanelProps {
            state: &state,
            is_focused: true,
        };

        let actions = panel.handle_event(&press(key("enter")), props);
        assert_eq!(actions, vec![Action::WeatherFetch]);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut panel = WeatherPanel::new();
        let state = AppState::default();
        let props = WeatherPanelProps {
            state: &state,
            is_focused: false,
        };

        let actions = panel.handle_event(&press(key("esc")), props);
        actions.assert_empty();
    }

    #[test]
    fn test_key_release_ignored() {
        let mut panel = WeatherPanel::new();
        let state = AppState::with_query("Paris");

        for k in [char_key('x'), key("esc")] {
            let props = WeatherPanelProps {
                state: &state,
                is_focused: true,
            };
            let event = press(KeyEvent {
                kind: KeyEventKind::Release,
                ..k
            });
            panel.handle_event(&event, props).assert_empty();
        }
    }

    #[test]
    fn test_render_loading_title_spinner() {
        let mut render = RenderHarness::new(60, 24);
        let mut panel = WeatherPanel::new();

        let state = AppState {
            is_loading: true,
            ..AppState::with_query("Paris")
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherPanelProps {
                state: &state,
                is_focused: true,
            };
            panel.render(frame, frame.area(), props);
        });

        assert!(output.contains("Weather App ◐"));
        assert!(output.contains("Fetching weather"));
        assert!(output.contains("Loading..."));
    }

    #[test]
    fn test_render_default_background() {
        let mut render = RenderHarness::new(200, 24);
        let mut panel = WeatherPanel::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherPanelProps {
                state: &state,
                is_focused: true,
            };
            panel.render(frame, frame.area(), props);
        });

        assert!(output.contains(citycast_core::DEFAULT_BACKGROUND));
    }
}
