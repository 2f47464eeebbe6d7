use super::super::super::state::App;
use crate::config::AppConfig;
use crate::prompter::Intent;
use iced::keyboard::{Key, Modifiers, key};

/// A pressed key spelled the way bindings spell it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PressedKey {
    token: String,
    /// Symbols often need Shift to type, so Shift only counts for letters and named keys.
    shift_sensitive: bool,
}

impl App {
    pub(super) fn shortcut_intent_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Intent> {
        let pressed = Self::pressed_key(key)?;
        Intent::ALL.into_iter().find(|intent| {
            let (raw, fallback) = Self::binding_for(&self.config, *intent);
            // An empty binding falls back to the intent's default key.
            raw.split(',').any(|alternative| {
                Self::shortcut_matches(alternative, fallback, &pressed, modifiers)
            })
        })
    }

    fn binding_for(config: &AppConfig, intent: Intent) -> (&str, &'static str) {
        match intent {
            Intent::PlayPause => (config.key_play_pause.as_str(), "space"),
            Intent::StepNext => (config.key_next_segment.as_str(), "down"),
            Intent::StepPrev => (config.key_prev_segment.as_str(), "up"),
            Intent::SpeedUp => (config.key_speed_up.as_str(), "right"),
            Intent::SpeedDown => (config.key_speed_down.as_str(), "left"),
            Intent::Reset => (config.key_reset.as_str(), "home"),
            Intent::ToggleAlwaysOnTop => (config.key_toggle_always_on_top.as_str(), "t"),
            Intent::Close => (config.key_close.as_str(), "escape"),
        }
    }

    pub(super) fn pressed_key(key: Key) -> Option<PressedKey> {
        let named = |token: &str| {
            Some(PressedKey {
                token: token.to_string(),
                shift_sensitive: true,
            })
        };
        match key.as_ref() {
            Key::Named(key::Named::Space) => named("space"),
            Key::Named(key::Named::ArrowUp) => named("up"),
            Key::Named(key::Named::ArrowDown) => named("down"),
            Key::Named(key::Named::ArrowLeft) => named("left"),
            Key::Named(key::Named::ArrowRight) => named("right"),
            Key::Named(key::Named::Home) => named("home"),
            Key::Named(key::Named::End) => named("end"),
            Key::Named(key::Named::Escape) => named("escape"),
            Key::Named(key::Named::PageUp) => named("pageup"),
            Key::Named(key::Named::PageDown) => named("pagedown"),
            Key::Character(ch) => {
                let shift_sensitive = ch.chars().all(|c| c.is_alphabetic());
                // `+` and `,` separate tokens in bindings, so they are spelled out.
                let token = match ch {
                    "+" => "plus".to_string(),
                    "," => "comma".to_string(),
                    other => other.to_lowercase(),
                };
                Some(PressedKey {
                    token,
                    shift_sensitive,
                })
            }
            _ => None,
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &PressedKey,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed.token != required_key {
            return false;
        }

        let shift_matters = required_shift || pressed.shift_sensitive;
        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && (!shift_matters || modifiers.shift() == required_shift)
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("arrow", "")
        }
    }
}
