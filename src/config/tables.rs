use super::defaults;
use super::models::{Alignment, AppConfig, LogLevel, ThemeMode, WindowHeightClass};
use serde::Deserialize;

/// On-disk layout of `config.toml`: one table per concern.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    script: ScriptConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.appearance.font_size,
            line_spacing: tables.appearance.line_spacing,
            spacer_lines: tables.appearance.spacer_lines,
            margin_horizontal: tables.appearance.margin_horizontal,
            margin_vertical: tables.appearance.margin_vertical,
            max_line_length: tables.script.max_line_length,
            speed: tables.script.speed,
            alignment: tables.script.alignment,
            window_height_class: tables.window.window_height_class,
            window_width: tables.window.window_width,
            always_on_top: tables.window.always_on_top,
            log_level: tables.logging.log_level,
            key_play_pause: tables.keys.play_pause,
            key_next_segment: tables.keys.next_segment,
            key_prev_segment: tables.keys.prev_segment,
            key_speed_up: tables.keys.speed_up,
            key_speed_down: tables.keys.speed_down,
            key_reset: tables.keys.reset,
            key_toggle_always_on_top: tables.keys.toggle_always_on_top,
            key_close: tables.keys.close,
        }
    }
}

#[cfg(test)]
impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            script: ScriptConfig {
                max_line_length: config.max_line_length,
                speed: config.speed,
                alignment: config.alignment,
            },
            window: WindowConfig {
                window_height_class: config.window_height_class,
                window_width: config.window_width,
                always_on_top: config.always_on_top,
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                font_size: config.font_size,
                line_spacing: config.line_spacing,
                spacer_lines: config.spacer_lines,
                margin_horizontal: config.margin_horizontal,
                margin_vertical: config.margin_vertical,
            },
            keys: KeysConfig {
                play_pause: config.key_play_pause.clone(),
                next_segment: config.key_next_segment.clone(),
                prev_segment: config.key_prev_segment.clone(),
                speed_up: config.key_speed_up.clone(),
                speed_down: config.key_speed_down.clone(),
                reset: config.key_reset.clone(),
                toggle_always_on_top: config.key_toggle_always_on_top.clone(),
                close: config.key_close.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScriptConfig {
    #[serde(default = "defaults::default_max_line_length")]
    max_line_length: usize,
    #[serde(default = "defaults::default_speed")]
    speed: u8,
    #[serde(default)]
    alignment: Alignment,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig {
            max_line_length: defaults::default_max_line_length(),
            speed: defaults::default_speed(),
            alignment: Alignment::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default)]
    window_height_class: WindowHeightClass,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default)]
    always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            window_height_class: WindowHeightClass::default(),
            window_width: defaults::default_window_width(),
            always_on_top: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
    #[serde(default = "defaults::default_line_spacing")]
    line_spacing: f32,
    #[serde(default = "defaults::default_spacer_lines")]
    spacer_lines: f32,
    #[serde(default = "defaults::default_margin_horizontal")]
    margin_horizontal: u16,
    #[serde(default = "defaults::default_margin_vertical")]
    margin_vertical: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            font_size: defaults::default_font_size(),
            line_spacing: defaults::default_line_spacing(),
            spacer_lines: defaults::default_spacer_lines(),
            margin_horizontal: defaults::default_margin_horizontal(),
            margin_vertical: defaults::default_margin_vertical(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_play_pause")]
    play_pause: String,
    #[serde(default = "defaults::default_key_next_segment")]
    next_segment: String,
    #[serde(default = "defaults::default_key_prev_segment")]
    prev_segment: String,
    #[serde(default = "defaults::default_key_speed_up")]
    speed_up: String,
    #[serde(default = "defaults::default_key_speed_down")]
    speed_down: String,
    #[serde(default = "defaults::default_key_reset")]
    reset: String,
    #[serde(default = "defaults::default_key_toggle_always_on_top")]
    toggle_always_on_top: String,
    #[serde(default = "defaults::default_key_close")]
    close: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            play_pause: defaults::default_key_play_pause(),
            next_segment: defaults::default_key_next_segment(),
            prev_segment: defaults::default_key_prev_segment(),
            speed_up: defaults::default_key_speed_up(),
            speed_down: defaults::default_key_speed_down(),
            reset: defaults::default_key_reset(),
            toggle_always_on_top: defaults::default_key_toggle_always_on_top(),
            close: defaults::default_key_close(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
