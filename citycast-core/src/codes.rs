//! Weather code lookup tables
//!
//! A WMO weather code is first classified into a [`Category`]; the icon,
//! background and label are then looked up from the category. Every
//! presentation output goes through [`classify`], so the three of them always
//! agree on where one category ends and the next begins.

/// Reference to a background image (a URL).
pub type ImageRef = &'static str;

/// Background shown when no conditions are loaded.
pub const DEFAULT_BACKGROUND: ImageRef = "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    RainShowers,
    Thunderstorm,
    Other,
}

impl Category {
    /// All categories, in classification order.
    pub const ALL: [Category; 8] = [
        Category::Clear,
        Category::PartlyCloudy,
        Category::Fog,
        Category::Rain,
        Category::Snow,
        Category::RainShowers,
        Category::Thunderstorm,
        Category::Other,
    ];

    /// Map WMO weather code to category
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Category::Clear,
            1..=3 => Category::PartlyCloudy,
            45..=48 => Category::Fog,
            51..=67 => Category::Rain,
            71..=77 => Category::Snow,
            80..=82 => Category::RainShowers,
            85..=86 => Category::Snow,
            95..=99 => Category::Thunderstorm,
            _ => Category::Other,
        }
    }
}

/// Icons available for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    Sunny,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
}

impl IconId {
    /// Single glyph for compact rendering
    pub fn glyph(self) -> &'static str {
        match self {
            IconId::Sunny => "☀",
            IconId::Cloudy => "☁",
            IconId::Rain => "☂",
            IconId::Snow => "❄",
            IconId::Thunderstorm => "⚡",
        }
    }
}

/// Classify a weather code. Total over `i32`: unknown codes are [`Category::Other`].
pub fn classify(code: i32) -> Category {
    Category::from_code(code)
}

pub fn icon_for(category: Category) -> IconId {
    match category {
        Category::Clear => IconId::Sunny,
        Category::PartlyCloudy | Category::Fog => IconId::Cloudy,
        Category::Rain | Category::RainShowers => IconId::Rain,
        Category::Snow => IconId::Snow,
        Category::Thunderstorm => IconId::Thunderstorm,
        Category::Other => IconId::Sunny,
    }
}

pub fn background_for(category: Category) -> ImageRef {
    match category {
        Category::Clear => "https://images.unsplash.com/photo-1498496294664-d9372eb521f3?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::PartlyCloudy => "https://images.unsplash.com/photo-1515694346937-94d85e41e6f0?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::Fog => "https://images.unsplash.com/photo-1504253163759-c23fccaebb55?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::Rain => "https://images.unsplash.com/photo-1438449805896-8e7f318e8eb3?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::Snow => "https://images.unsplash.com/photo-1483728642387-6c3bdd6c93e5?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::RainShowers => "https://images.unsplash.com/photo-1534274988757-a28bf1a57c17?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::Thunderstorm => "https://images.unsplash.com/photo-1562155618-e1a8bc2eb04f?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        Category::Other => DEFAULT_BACKGROUND,
    }
}

/// Human-readable summary of a category
pub fn label_for(category: Category) -> &'static str {
    match category {
        Category::Clear => "Clear sky",
        Category::PartlyCloudy => "Partly cloudy",
        Category::Fog => "Foggy",
        Category::Rain => "Rainy",
        Category::Snow => "Snowy",
        Category::RainShowers => "Rain showers",
        Category::Thunderstorm => "Thunderstorm",
        Category::Other => "Fair weather",
    }
}
