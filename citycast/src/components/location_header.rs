use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use citycast_core::{Coordinates, Location};

use super::Component;
use crate::action::Action;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a Location,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 2;
}

/// "40.71°N, 74.01°W": hemisphere letter from the sign, magnitude to 2 places
pub fn format_coordinates(coords: Coordinates) -> String {
    let ns = if coords.latitude < 0.0 { 'S' } else { 'N' };
    let ew = if coords.longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.2}°{}, {:.2}°{}",
        coords.latitude.abs(),
        ns,
        coords.longitude.abs(),
        ew
    )
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let location_line = Line::from(vec![Span::styled(
            props.location.display_name(),
            Style::default().fg(Color::White).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(location_line), chunks[0]);

        let coords = props.location.coordinates;
        let coords_line = Line::from(vec![Span::styled(
            format_coordinates(coords),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(coords_line), chunks[1]);
    }
}
