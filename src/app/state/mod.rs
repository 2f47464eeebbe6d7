mod constants;
mod viewport;

use super::layout::LayoutModel;
use super::messages::Message;
use crate::config::{AppConfig, ThemeMode};
use crate::prompter::{FrameClock, ScrollController};
use crate::session::{SessionCommand, SessionConfig, SessionEvent, SessionManager};
use iced::{Color, Task};
use std::path::PathBuf;
use tracing::{debug, info};

pub(crate) use constants::*;
pub(in crate::app) use viewport::ViewportState;

/// A script read before the window opened.
pub struct InitialScript {
    pub path: PathBuf,
    pub text: String,
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) sessions: SessionManager,
    pub(super) clock: FrameClock,
    pub(super) viewport: ViewportState,
    pub(super) script_path: Option<PathBuf>,
    pub(super) open_path_input: String,
    pub(super) script_loading: bool,
    pub(super) status_error: Option<String>,
}

impl App {
    pub fn bootstrap(
        config: AppConfig,
        initial: Option<InitialScript>,
        startup_error: Option<String>,
    ) -> (App, Task<Message>) {
        let mut sessions = SessionManager::new(config.max_line_length);
        // The initial window level comes from window settings; this only records it.
        sessions.handle(SessionCommand::SetAlwaysOnTop(config.always_on_top));
        let viewport = ViewportState::new(
            config.window_width,
            config.window_height_class.height_px(),
        );
        let mut app = App {
            config,
            sessions,
            clock: FrameClock::new(),
            viewport,
            script_path: None,
            open_path_input: String::new(),
            script_loading: false,
            status_error: startup_error,
        };

        if let Some(script) = initial {
            app.open_script(script.path, script.text);
        }
        (app, Task::none())
    }

    /// Open `text` as the active session, replacing any previous one.
    pub(super) fn open_script(&mut self, path: PathBuf, text: String) -> SessionEvent {
        self.clock.disarm();
        let session_config = SessionConfig::from_app_config(text, &self.config);
        let event = self.sessions.handle(SessionCommand::Open(session_config));
        self.open_path_input = path.display().to_string();
        self.script_path = Some(path);
        self.status_error = None;
        self.refresh_geometry();
        event
    }

    pub(super) fn controller(&self) -> Option<&ScrollController> {
        self.sessions.controller()
    }

    pub(super) fn controller_mut(&mut self) -> Option<&mut ScrollController> {
        self.sessions.controller_mut()
    }

    /// Rebuild segment geometry and the scroll range from the layout model.
    pub(super) fn refresh_geometry(&mut self) {
        let layout = LayoutModel::from_config(&self.config);
        let viewport_height = self.viewport.viewport_height();
        let Some(controller) = self.sessions.controller_mut() else {
            return;
        };
        let geometry = layout.geometry(controller.segments());
        let content_height = layout.content_height(&geometry);
        controller.set_geometry(geometry);
        controller.recompute_geometry(content_height, viewport_height);
        debug!(
            content_height,
            viewport_height = controller.viewport_height(),
            max_offset = controller.max_offset(),
            "Recomputed script geometry"
        );
    }

    /// Keep the frame clock in step with the controller's play state.
    pub(super) fn sync_clock(&mut self) {
        let playing = self.controller().is_some_and(ScrollController::is_playing);
        match (playing, self.clock.is_armed()) {
            (true, false) => {
                self.clock.arm();
                info!("Started auto-scroll");
            }
            (false, true) => {
                self.clock.disarm();
                info!("Stopped auto-scroll");
            }
            _ => {}
        }
    }

    pub(super) fn text_color(&self, active: bool) -> Color {
        let base = match self.config.theme {
            ThemeMode::Day => Color::BLACK,
            ThemeMode::Night => Color::WHITE,
        };
        if active {
            base
        } else {
            Color {
                a: INACTIVE_ROW_ALPHA,
                ..base
            }
        }
    }
}
