use crate::prompter::{MAX_SPEED, MIN_SPEED};
use iced::alignment::{Horizontal, Vertical};
use serde::Deserialize;

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 96;
pub const MIN_MAX_LINE_LENGTH: usize = 8;
pub const MAX_MAX_LINE_LENGTH: usize = 400;
/// Rough advance width of one glyph, as a fraction of the font size.
pub const AVERAGE_GLYPH_WIDTH_EM: f32 = 0.6;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::config::defaults::default_line_spacing")]
    pub line_spacing: f32,
    #[serde(default = "crate::config::defaults::default_spacer_lines")]
    pub spacer_lines: f32,
    #[serde(default = "crate::config::defaults::default_margin_horizontal")]
    pub margin_horizontal: u16,
    #[serde(default = "crate::config::defaults::default_margin_vertical")]
    pub margin_vertical: u16,
    #[serde(default = "crate::config::defaults::default_max_line_length")]
    pub max_line_length: usize,
    #[serde(default = "crate::config::defaults::default_speed")]
    pub speed: u8,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub window_height_class: WindowHeightClass,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default)]
    pub always_on_top: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_play_pause")]
    pub key_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_next_segment")]
    pub key_next_segment: String,
    #[serde(default = "crate::config::defaults::default_key_prev_segment")]
    pub key_prev_segment: String,
    #[serde(default = "crate::config::defaults::default_key_speed_up")]
    pub key_speed_up: String,
    #[serde(default = "crate::config::defaults::default_key_speed_down")]
    pub key_speed_down: String,
    #[serde(default = "crate::config::defaults::default_key_reset")]
    pub key_reset: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_always_on_top")]
    pub key_toggle_always_on_top: String,
    #[serde(default = "crate::config::defaults::default_key_close")]
    pub key_close: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            font_size: crate::config::defaults::default_font_size(),
            line_spacing: crate::config::defaults::default_line_spacing(),
            spacer_lines: crate::config::defaults::default_spacer_lines(),
            margin_horizontal: crate::config::defaults::default_margin_horizontal(),
            margin_vertical: crate::config::defaults::default_margin_vertical(),
            max_line_length: crate::config::defaults::default_max_line_length(),
            speed: crate::config::defaults::default_speed(),
            alignment: Alignment::default(),
            window_height_class: WindowHeightClass::default(),
            window_width: crate::config::defaults::default_window_width(),
            always_on_top: false,
            log_level: crate::config::defaults::default_log_level(),
            key_play_pause: crate::config::defaults::default_key_play_pause(),
            key_next_segment: crate::config::defaults::default_key_next_segment(),
            key_prev_segment: crate::config::defaults::default_key_prev_segment(),
            key_speed_up: crate::config::defaults::default_key_speed_up(),
            key_speed_down: crate::config::defaults::default_key_speed_down(),
            key_reset: crate::config::defaults::default_key_reset(),
            key_toggle_always_on_top: crate::config::defaults::default_key_toggle_always_on_top(),
            key_close: crate::config::defaults::default_key_close(),
        }
    }
}

impl AppConfig {
    /// Width left for text between the horizontal margins.
    pub fn content_width(&self) -> f32 {
        (self.window_width - 2.0 * self.margin_horizontal as f32).max(0.0)
    }

    /// Longest line, in characters, that fits `content_width` at the current font size.
    pub fn fitting_line_length(&self) -> usize {
        let glyph_width = self.font_size.max(1) as f32 * AVERAGE_GLYPH_WIDTH_EM;
        (self.content_width() / glyph_width).floor() as usize
    }

    /// Pull numeric settings back into their supported ranges.
    pub fn sanitized(mut self) -> Self {
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.line_spacing = if self.line_spacing.is_finite() {
            self.line_spacing.clamp(0.8, 3.0)
        } else {
            crate::config::defaults::default_line_spacing()
        };
        self.spacer_lines = if self.spacer_lines.is_finite() {
            self.spacer_lines.clamp(0.0, 4.0)
        } else {
            crate::config::defaults::default_spacer_lines()
        };
        self.window_width = if self.window_width.is_finite() {
            self.window_width.clamp(320.0, 7680.0)
        } else {
            crate::config::defaults::default_window_width()
        };
        // Rows are never wrapped by the view, so a line must fit the window.
        let fitting = self.fitting_line_length();
        if self.max_line_length > fitting {
            tracing::debug!(
                requested = self.max_line_length,
                fitting,
                "Shortened max_line_length to fit the window"
            );
        }
        self.max_line_length = self
            .max_line_length
            .min(fitting)
            .clamp(MIN_MAX_LINE_LENGTH, MAX_MAX_LINE_LENGTH);
        self
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Where the script text sits inside each row.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    pub fn horizontal(self) -> Horizontal {
        match self {
            Alignment::TopLeft | Alignment::CenterLeft | Alignment::BottomLeft => Horizontal::Left,
            Alignment::TopCenter | Alignment::Center | Alignment::BottomCenter => {
                Horizontal::Center
            }
            Alignment::TopRight | Alignment::CenterRight | Alignment::BottomRight => {
                Horizontal::Right
            }
        }
    }

    pub fn vertical(self) -> Vertical {
        match self {
            Alignment::TopLeft | Alignment::TopCenter | Alignment::TopRight => Vertical::Top,
            Alignment::CenterLeft | Alignment::Center | Alignment::CenterRight => Vertical::Center,
            Alignment::BottomLeft | Alignment::BottomCenter | Alignment::BottomRight => {
                Vertical::Bottom
            }
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Alignment::TopLeft => "Top Left",
            Alignment::TopCenter => "Top Center",
            Alignment::TopRight => "Top Right",
            Alignment::CenterLeft => "Center Left",
            Alignment::Center => "Center",
            Alignment::CenterRight => "Center Right",
            Alignment::BottomLeft => "Bottom Left",
            Alignment::BottomCenter => "Bottom Center",
            Alignment::BottomRight => "Bottom Right",
        };
        write!(f, "{}", label)
    }
}

/// Initial window height bucket.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowHeightClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl WindowHeightClass {
    pub fn height_px(self) -> f32 {
        match self {
            WindowHeightClass::Small => 240.0,
            WindowHeightClass::Medium => 480.0,
            WindowHeightClass::Large => 720.0,
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_fits_default_window() {
        let config = AppConfig::default();
        let line_width =
            config.max_line_length as f32 * config.font_size as f32 * AVERAGE_GLYPH_WIDTH_EM;
        assert!(
            line_width <= config.content_width(),
            "{line_width}px line in {}px of content",
            config.content_width()
        );
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn oversized_line_length_is_shortened_to_fit() {
        let mut config = AppConfig::default();
        config.font_size = 40;
        config.max_line_length = 72;
        config.window_width = 1024.0;
        config.margin_horizontal = 48;
        // 928px of content at 24px per glyph.
        assert_eq!(config.sanitized().max_line_length, 38);
    }

    #[test]
    fn fitting_length_never_drops_below_minimum() {
        let mut config = AppConfig::default();
        config.font_size = MAX_FONT_SIZE;
        config.window_width = 320.0;
        config.margin_horizontal = 160;
        assert_eq!(config.sanitized().max_line_length, MIN_MAX_LINE_LENGTH);
    }
}
