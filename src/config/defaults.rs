pub(crate) fn default_font_size() -> u32 {
    28
}

pub(crate) fn default_line_spacing() -> f32 {
    1.3
}

pub(crate) fn default_spacer_lines() -> f32 {
    1.0
}

pub(crate) fn default_margin_horizontal() -> u16 {
    48
}

pub(crate) fn default_margin_vertical() -> u16 {
    24
}

pub(crate) fn default_max_line_length() -> usize {
    48
}

pub(crate) fn default_speed() -> u8 {
    5
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_next_segment() -> String {
    "down,j".to_string()
}

pub(crate) fn default_key_prev_segment() -> String {
    "up,k".to_string()
}

pub(crate) fn default_key_speed_up() -> String {
    "right,plus,=".to_string()
}

pub(crate) fn default_key_speed_down() -> String {
    "left,-".to_string()
}

pub(crate) fn default_key_reset() -> String {
    "home,r".to_string()
}

pub(crate) fn default_key_toggle_always_on_top() -> String {
    "t".to_string()
}

pub(crate) fn default_key_close() -> String {
    "escape,q".to_string()
}
