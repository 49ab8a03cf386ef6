//! Weather sprites and condition colors
//!
//! Each icon has a Small and a Large variant; the size is picked from the
//! terminal height. Colors come from the weather category, so the sprite and
//! the panel border (the backdrop) always match the label underneath.

use citycast_core::{Category, IconId};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

// ============================================================================
// Sprite data
// ============================================================================

mod sprite_data {
    pub mod sunny {
        pub const SMALL: &str = r"   \   /
    .-.
 - (   ) -
    `-'
   /   \";
        pub const LARGE: &str = r"     \   |   /
      .-'''-.
 --- /       \ ---
     \       /
      `-...-'
     /   |   \
";
    }
    pub mod cloudy {
        pub const SMALL: &str = r"
     .--.
  .-(    ).
 (___.__)__)
";
        pub const LARGE: &str = r"
        .--.
     .-(    ).
   (___.__)__)
     .-(  ).
    (__.__)
";
    }
    pub mod rain {
        pub const SMALL: &str = r"     .-.
    (   ).
   (___(__)
    ' ' ' '
   ' ' ' '";
        pub const LARGE: &str = r"       .--.
    .-(    ).
   (___.__)__)
    ' ' ' ' '
   ' ' ' ' '
    ' ' ' ' '
";
    }
    pub mod snow {
        pub const SMALL: &str = r"     .-.
    (   ).
   (___(__)
    *  *  *
   *  *  *";
        pub const LARGE: &str = r"       .--.
    .-(    ).
   (___.__)__)
    *   *   *
      *   *
    *   *   *
";
    }
    pub mod thunderstorm {
        pub const SMALL: &str = r"     .-.
    (   ).
   (___(__)
    /_ /_
     /  /";
        pub const LARGE: &str = r"       .--.
    .-(    ).
   (___.__)__)
     /_  /_
      /   /
     /   /
";
    }
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 5 lines - for normal terminals
    Small,
    /// 7 lines - for tall terminals
    Large,
}

impl SpriteSize {
    /// Determine appropriate sprite size based on terminal dimensions
    pub fn from_terminal_size(_width: u16, height: u16) -> Self {
        // UI chrome: border (2) + search (4) + header (2) + labels (6) + footer (2) = 16
        let content_height = height.saturating_sub(16);

        match content_height {
            0..=11 => SpriteSize::Small,
            _ => SpriteSize::Large,
        }
    }
}

/// Primary color for a weather category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Clear => Color::Yellow,
        Category::PartlyCloudy => Color::Rgb(200, 200, 100),
        Category::Fog => Color::Rgb(150, 150, 160),
        Category::Rain => Color::Rgb(80, 140, 200),
        Category::RainShowers => Color::Rgb(130, 170, 200),
        Category::Snow => Color::Rgb(200, 220, 255),
        Category::Thunderstorm => Color::Rgb(180, 180, 50),
        Category::Other => Color::Rgb(150, 150, 165),
    }
}

/// Border tint standing in for the background image
pub fn backdrop_color(category: Option<Category>) -> Color {
    category
        .map(category_color)
        .unwrap_or(Color::Rgb(80, 80, 100))
}

// ============================================================================
// Public API
// ============================================================================

/// Get the sprite for a category, sized for the terminal
pub fn weather_sprite(category: Category, terminal_size: (u16, u16)) -> Text<'static> {
    let size = SpriteSize::from_terminal_size(terminal_size.0, terminal_size.1);
    get_sprite(citycast_core::icon_for(category), size, category_color(category))
}

/// Get art for the given icon and size
pub fn get_sprite(icon: IconId, size: SpriteSize, color: Color) -> Text<'static> {
    let sprite_str = match (icon, size) {
        (IconId::Sunny, SpriteSize::Small) => sprite_data::sunny::SMALL,
        (IconId::Sunny, SpriteSize::Large) => sprite_data::sunny::LARGE,
        (IconId::Cloudy, SpriteSize::Small) => sprite_data::cloudy::SMALL,
        (IconId::Cloudy, SpriteSize::Large) => sprite_data::cloudy::LARGE,
        (IconId::Rain, SpriteSize::Small) => sprite_data::rain::SMALL,
        (IconId::Rain, SpriteSize::Large) => sprite_data::rain::LARGE,
        (IconId::Snow, SpriteSize::Small) => sprite_data::snow::SMALL,
        (IconId::Snow, SpriteSize::Large) => sprite_data::snow::LARGE,
        (IconId::Thunderstorm, SpriteSize::Small) => sprite_data::thunderstorm::SMALL,
        (IconId::Thunderstorm, SpriteSize::Large) => sprite_data::thunderstorm::LARGE,
    };

    sprite_to_text(sprite_str, color)
}

/// Convert sprite string to colored Text, padding every line to the same
/// width so centering keeps the art aligned
fn sprite_to_text(sprite: &'static str, color: Color) -> Text<'static> {
    let style = Style::default().fg(color);
    let width = sprite.lines().map(str::len).max().unwrap_or(0);
    let lines: Vec<Line> = sprite
        .lines()
        .map(|line| Line::from(Span::styled(format!("{:<width$}", line), style)))
        .collect();
    Text::from(lines)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: [IconId; 5] = [
        IconId::Sunny,
        IconId::Cloudy,
        IconId::Rain,
        IconId::Snow,
        IconId::Thunderstorm,
    ];

    #[test]
    fn test_sprite_size_from_terminal() {
        assert_eq!(SpriteSize::from_terminal_size(80, 24), SpriteSize::Small);
        assert_eq!(SpriteSize::from_terminal_size(80, 27), SpriteSize::Small);
        assert_eq!(SpriteSize::from_terminal_size(80, 28), SpriteSize::Large);
        assert_eq!(SpriteSize::from_terminal_size(80, 50), SpriteSize::Large);
    }

    #[test]
    fn test_all_sprites_load() {
        for icon in ICONS {
            for size in [SpriteSize::Small, SpriteSize::Large] {
                let text = get_sprite(icon, size, Color::White);
                assert!(
                    !text.lines.is_empty(),
                    "Sprite {:?}/{:?} should not be empty",
                    icon,
                    size
                );
            }
        }
    }

    #[test]
    fn test_small_sprites_fit_five_lines() {
        for icon in ICONS {
            let text = get_sprite(icon, SpriteSize::Small, Color::White);
            assert!(text.lines.len() <= 5, "{:?} is too tall", icon);
        }
    }

    #[test]
    fn test_sprite_lines_are_padded_to_equal_width() {
        let text = get_sprite(IconId::Sunny, SpriteSize::Small, Color::White);
        let widths: Vec<usize> = text.lines.iter().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_backdrop_follows_category() {
        assert_eq!(backdrop_color(Some(Category::Clear)), Color::Yellow);
        assert_eq!(backdrop_color(None), Color::Rgb(80, 80, 100));
        // Snow showers (85..=86) share the snow tint
        assert_eq!(
            category_color(citycast_core::classify(86)),
            category_color(Category::Snow)
        );
    }
}
