use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub muted: Color,
    pub recording: Color,
    pub toast_fg: Color,
    pub toast_border: Color,
    pub toast_error: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            cursor: Color::Cyan,
            muted: Color::DarkGray,
            recording: Color::Green,
            toast_fg: Color::White,
            toast_border: Color::Green,
            toast_error: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            cursor: Color::Cyan,
            muted: Color::DarkGray,
            recording: Color::Green,
            toast_fg: Color::White,
            toast_border: Color::Cyan,
            toast_error: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            cursor: Color::Blue,
            muted: Color::Gray,
            recording: Color::Green,
            toast_fg: Color::Black,
            toast_border: Color::Blue,
            toast_error: Color::Red,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_config() {
        let mut config = Config::default();
        assert_eq!(Theme::from_config(&config).background, Color::Reset);

        config.theme = "light".to_string();
        assert_eq!(Theme::from_config(&config).background, Color::White);

        config.theme = "unknown".to_string();
        assert_eq!(Theme::from_config(&config).cursor, Color::Cyan);
    }
}
