use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color scheme picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Calm,
    Sunset,
    Forest,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Calm, ThemeMode::Sunset, ThemeMode::Forest];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Calm => "calm",
            ThemeMode::Sunset => "sunset",
            ThemeMode::Forest => "forest",
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            ThemeMode::Calm => ThemePalette {
                primary: 0x4DB6AC,   // teal
                secondary: 0xB3E5FC, // light blue
                accent: 0xE6E6FA,    // lavender
                background: 0xF5FBFB,
            },
            ThemeMode::Sunset => ThemePalette {
                primary: 0xFF7043,   // coral
                secondary: 0xFFB74D, // amber
                accent: 0xFFCCBC,    // peach
                background: 0xFFF8F5,
            },
            ThemeMode::Forest => ThemePalette {
                primary: 0x66BB6A,   // green
                secondary: 0x81C784, // light green
                accent: 0xC8E6C9,    // pale green
                background: 0xF6FBF6,
            },
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.label() == wanted)
            .ok_or_else(|| format!("unknown theme '{}' (expected calm, sunset or forest)", s.trim()))
    }
}

/// Immutable set of colors handed to every rendering call
///
/// Colors are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: u32,
    pub secondary: u32,
    pub accent: u32,
    pub background: u32,
}

impl ThemePalette {
    /// `#RRGGBB` form of a palette color
    pub fn hex(color: u32) -> String {
        format!("#{:06X}", color & 0xFF_FFFF)
    }

    /// Wrap `text` in a 24-bit ANSI foreground color
    pub fn paint(color: u32, text: &str) -> String {
        let (r, g, b) = ((color >> 16) & 0xFF, (color >> 8) & 0xFF, color & 0xFF);
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        ThemeMode::default().palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_match_modes() {
        assert_eq!(ThemePalette::hex(ThemeMode::Calm.palette().primary), "#4DB6AC");
        assert_eq!(ThemePalette::hex(ThemeMode::Sunset.palette().secondary), "#FFB74D");
        assert_eq!(ThemePalette::hex(ThemeMode::Forest.palette().accent), "#C8E6C9");
    }

    #[test]
    fn test_parse_theme_mode() {
        assert_eq!("Sunset".parse::<ThemeMode>(), Ok(ThemeMode::Sunset));
        assert_eq!(" forest ".parse::<ThemeMode>(), Ok(ThemeMode::Forest));
        assert!("neon".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_theme_mode_serde() {
        let json = serde_json::to_string(&ThemeMode::Forest).unwrap();
        assert_eq!(json, "\"forest\"");
        let parsed: ThemeMode = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(parsed, ThemeMode::Calm);
    }

    #[test]
    fn test_paint_wraps_text() {
        let painted = ThemePalette::paint(0x4DB6AC, "hi");
        assert!(painted.starts_with("\x1b[38;2;77;182;172m"));
        assert!(painted.ends_with("hi\x1b[0m"));
    }
}
