use serde::{Deserialize, Serialize};

/// Color theme for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    /// Error banner
    pub error: Color,

    pub title: Color,
    pub subtitle: Color,
    pub link: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,

    /// Search button, idle and busy
    pub button: Color,
    pub button_busy: Color,

    pub accent: Color,
    pub muted: Color,
    pub stars: Color,
    pub forks: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::rgb)
    }
}

impl Theme {
    pub fn default_dark() -> Self {
        Self {
            name: "Default Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x0d1117),
                foreground: Color::rgb(0xc9d1d9),
                border: Color::rgb(0x30363d),
                border_focused: Color::rgb(0x58a6ff),
                error: Color::rgb(0xf85149),
                title: Color::rgb(0xf0f6fc),
                subtitle: Color::rgb(0x8b949e),
                link: Color::rgb(0x58a6ff),
                tab_active: Color::rgb(0xf78166),
                tab_inactive: Color::rgb(0x8b949e),
                button: Color::rgb(0x238636),
                button_busy: Color::rgb(0x6e7681),
                accent: Color::rgb(0xd29922),
                muted: Color::rgb(0x6e7681),
                stars: Color::rgb(0xe3b341),
                forks: Color::rgb(0x8b949e),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xffffff),
                foreground: Color::rgb(0x1f2328),
                border: Color::rgb(0xd0d7de),
                border_focused: Color::rgb(0x0969da),
                error: Color::rgb(0xcf222e),
                title: Color::rgb(0x1f2328),
                subtitle: Color::rgb(0x656d76),
                link: Color::rgb(0x0969da),
                tab_active: Color::rgb(0xfd8c73),
                tab_inactive: Color::rgb(0x656d76),
                button: Color::rgb(0x1f883d),
                button_busy: Color::rgb(0x8c959f),
                accent: Color::rgb(0x9a6700),
                muted: Color::rgb(0x8c959f),
                stars: Color::rgb(0xbf8700),
                forks: Color::rgb(0x656d76),
            },
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x2e3440),
                foreground: Color::rgb(0xeceff4),
                border: Color::rgb(0x4c566a),
                border_focused: Color::rgb(0x88c0d0),
                error: Color::rgb(0xbf616a),
                title: Color::rgb(0xb48ead),
                subtitle: Color::rgb(0xd8dee9),
                link: Color::rgb(0x81a1c1),
                tab_active: Color::rgb(0x8fbcbb),
                tab_inactive: Color::rgb(0x4c566a),
                button: Color::rgb(0xa3be8c),
                button_busy: Color::rgb(0x4c566a),
                accent: Color::rgb(0xebcb8b),
                muted: Color::rgb(0x4c566a),
                stars: Color::rgb(0xebcb8b),
                forks: Color::rgb(0x8fbcbb),
            },
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x282a36),
                foreground: Color::rgb(0xf8f8f2),
                border: Color::rgb(0x44475a),
                border_focused: Color::rgb(0xbd93f9),
                error: Color::rgb(0xff5555),
                title: Color::rgb(0xff79c6),
                subtitle: Color::rgb(0x6272a4),
                link: Color::rgb(0x8be9fd),
                tab_active: Color::rgb(0xff79c6),
                tab_inactive: Color::rgb(0x6272a4),
                button: Color::rgb(0x50fa7b),
                button_busy: Color::rgb(0x6272a4),
                accent: Color::rgb(0xf1fa8c),
                muted: Color::rgb(0x6272a4),
                stars: Color::rgb(0xf1fa8c),
                forks: Color::rgb(0x8be9fd),
            },
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x282828),
                foreground: Color::rgb(0xebdbb2),
                border: Color::rgb(0x504945),
                border_focused: Color::rgb(0x83a598),
                error: Color::rgb(0xfb4934),
                title: Color::rgb(0xd3869b),
                subtitle: Color::rgb(0xa89984),
                link: Color::rgb(0x83a598),
                tab_active: Color::rgb(0xd3869b),
                tab_inactive: Color::rgb(0x665c54),
                button: Color::rgb(0xb8bb26),
                button_busy: Color::rgb(0x665c54),
                accent: Color::rgb(0xfabd2f),
                muted: Color::rgb(0x665c54),
                stars: Color::rgb(0xfabd2f),
                forks: Color::rgb(0x8ec07c),
            },
        }
    }

    pub fn all_themes() -> Vec<Theme> {
        vec![
            Self::default_dark(),
            Self::light(),
            Self::nord(),
            Self::dracula(),
            Self::gruvbox(),
        ]
    }

    /// Case-insensitive lookup
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::all_themes()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb() {
        assert_eq!(Color::rgb(0xdea584), Color::new(0xde, 0xa5, 0x84));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#3572A5"), Some(Color::new(0x35, 0x72, 0xa5)));
        assert_eq!(Color::from_hex("8b949e"), Some(Color::new(0x8b, 0x94, 0x9e)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("dracula").unwrap().name, "Dracula");
        assert_eq!(Theme::by_name("GRUVBOX DARK").unwrap().name, "Gruvbox Dark");
        assert!(Theme::by_name("solarized").is_none());
    }
}
