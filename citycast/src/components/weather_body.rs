use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use citycast_core::{label_for, WeatherReport};

use super::{Component, LocationHeader, LocationHeaderProps, SPINNERS};
use crate::action::Action;
use crate::sprites;
use crate::state::AppState;

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = WeatherView::from_state(props.state);
        let blocks = blocks_for_view(&view, props.state);

        let header_height = match view {
            WeatherView::Ready(_) => LocationHeader::HEIGHT,
            _ => 0,
        };

        let mut constraints = Vec::with_capacity(blocks.len() + 1);
        constraints.push(Constraint::Length(header_height));
        constraints.extend(blocks.iter().map(|block| Constraint::Length(block.height())));

        let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);
        let Some((header_area, body_areas)) = chunks.split_first() else {
            return;
        };

        if let WeatherView::Ready(report) = view {
            let mut header = LocationHeader;
            header.render(
                frame,
                *header_area,
                LocationHeaderProps {
                    location: &report.location,
                },
            );
        }

        for (block, area) in blocks.into_iter().zip(body_areas.iter().copied()) {
            block.render(frame, area);
        }
    }
}

/// What the body shows. Errors are shown by the search bar.
enum WeatherView<'a> {
    Ready(&'a WeatherReport),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.is_loading {
            WeatherView::Loading
        } else if let Some(report) = state.report.as_ref() {
            WeatherView::Ready(report)
        } else {
            WeatherView::Empty
        }
    }
}

enum BodyBlock {
    Line(Line<'static>),
    Sprite { art: Text<'static>, height: u16 },
}

impl BodyBlock {
    fn height(&self) -> u16 {
        match self {
            BodyBlock::Line(_) => 1,
            BodyBlock::Sprite { height, .. } => *height,
        }
    }

    fn render(self, frame: &mut Frame, area: Rect) {
        match self {
            BodyBlock::Line(line) => {
                frame.render_widget(Paragraph::new(line), area);
            }
            BodyBlock::Sprite { art, .. } => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), area);
            }
        }
    }
}

fn blocks_for_view(view: &WeatherView<'_>, state: &AppState) -> Vec<BodyBlock> {
    match view {
        WeatherView::Ready(report) => {
            let conditions = &report.conditions;
            let category = conditions.category();
            let art = sprites::weather_sprite(category, state.terminal_size);
            let sprite_height = art.lines.len() as u16;
            let icon = citycast_core::icon_for(category);

            vec![
                blank_line(),
                BodyBlock::Sprite {
                    art,
                    height: sprite_height,
                },
                blank_line(),
                BodyBlock::Line(
                    Line::from(vec![Span::styled(
                        format!("{} {}", icon.glyph(), label_for(category)),
                        Style::default().fg(sprites::category_color(category)).bold(),
                    )])
                    .centered(),
                ),
                stat_line(
                    "Temperature",
                    format!("{}°C", conditions.temperature),
                    temp_to_color(conditions.temperature),
                ),
                stat_line(
                    "Wind",
                    format!("{} km/h", conditions.wind_speed),
                    Color::Gray,
                ),
                stat_line(
                    "Wind Direction",
                    format!("{}°", conditions.wind_direction),
                    Color::Gray,
                ),
            ]
        }
        WeatherView::Loading => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);

            vec![
                blank_line(),
                BodyBlock::Line(
                    Line::from(vec![
                        Span::styled(spinner, Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!(" Fetching weather{:<3}", dots),
                            Style::default().fg(Color::Gray),
                        ),
                    ])
                    .centered(),
                ),
            ]
        }
        WeatherView::Empty => vec![
            blank_line(),
            BodyBlock::Line(
                Line::from(vec![
                    Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
                    Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                ])
                .centered(),
            ),
        ],
    }
}

fn stat_line(name: &'static str, value: String, color: Color) -> BodyBlock {
    BodyBlock::Line(
        Line::from(vec![
            Span::styled(format!("{}: ", name), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
        .centered(),
    )
}

fn blank_line() -> BodyBlock {
    BodyBlock::Line(Line::from("").centered())
}

/// Get temperature-based color
fn temp_to_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}
