//! Prompter sessions and the command channel that drives them.
//!
//! At most one script is on screen at a time. The host sends
//! [`SessionCommand`]s and reacts to the returned [`SessionEvent`]; window
//! handling stays on the host side.

use crate::config::{Alignment, AppConfig, WindowHeightClass};
use crate::prompter::{ScrollController, clamp_speed};
use crate::segmenter::segment;
use tracing::{debug, info};

/// Everything needed to open a session; immutable once delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub text: String,
    pub speed: u8,
    pub alignment: Alignment,
    pub window_height_class: WindowHeightClass,
}

impl SessionConfig {
    pub fn from_app_config(text: String, config: &AppConfig) -> Self {
        Self {
            text,
            speed: config.speed,
            alignment: config.alignment,
            window_height_class: config.window_height_class,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Open(SessionConfig),
    Close,
    SetAlwaysOnTop(bool),
    ToggleAlwaysOnTop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Opened {
        segments: usize,
        window_height_class: WindowHeightClass,
    },
    Closed,
    AlwaysOnTopChanged(bool),
    /// The command had nothing to act on.
    Ignored,
}

/// One displayed script.
#[derive(Debug)]
pub struct Session {
    pub config: SessionConfig,
    pub controller: ScrollController,
}

#[derive(Debug)]
pub struct SessionManager {
    active: Option<Session>,
    max_line_length: usize,
    always_on_top: bool,
}

impl SessionManager {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            active: None,
            max_line_length,
            always_on_top: false,
        }
    }

    pub fn handle(&mut self, command: SessionCommand) -> SessionEvent {
        match command {
            SessionCommand::Open(config) => self.open(config),
            SessionCommand::Close => {
                if self.active.take().is_some() {
                    info!("Closed prompter session");
                    SessionEvent::Closed
                } else {
                    SessionEvent::Ignored
                }
            }
            SessionCommand::SetAlwaysOnTop(enabled) => self.set_always_on_top(enabled),
            SessionCommand::ToggleAlwaysOnTop => self.set_always_on_top(!self.always_on_top),
        }
    }

    fn open(&mut self, config: SessionConfig) -> SessionEvent {
        let segments = segment(&config.text, self.max_line_length);
        let count = segments.len();
        let mut controller = ScrollController::new();
        controller.load(segments, clamp_speed(config.speed as i32));
        let window_height_class = config.window_height_class;

        if self.active.replace(Session { config, controller }).is_some() {
            debug!("Replaced previous prompter session");
        }
        info!(segments = count, "Opened prompter session");
        SessionEvent::Opened {
            segments: count,
            window_height_class,
        }
    }

    fn set_always_on_top(&mut self, enabled: bool) -> SessionEvent {
        if self.always_on_top == enabled {
            return SessionEvent::Ignored;
        }
        self.always_on_top = enabled;
        info!(enabled, "Always-on-top changed");
        SessionEvent::AlwaysOnTopChanged(enabled)
    }

    pub fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn controller(&self) -> Option<&ScrollController> {
        self.active.as_ref().map(|session| &session.controller)
    }

    pub fn controller_mut(&mut self) -> Option<&mut ScrollController> {
        self.active.as_mut().map(|session| &mut session.controller)
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }
}
