mod layout;
mod messages;
mod state;
mod update;
mod view;

pub use state::{App, InitialScript};

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};

/// Launch the prompter window, optionally with a script already loaded.
pub fn run_app(
    config: AppConfig,
    initial: Option<InitialScript>,
    startup_error: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height_class.height_px()),
        level: if config.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        ..window::Settings::default()
    };

    iced::application("Teleprompter", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, initial, startup_error))
}
