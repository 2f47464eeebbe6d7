use crate::prompter::Intent;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Intent(Intent),
    SpeedChanged(u8),
    Frame(Instant),
    OpenPathInputChanged(String),
    OpenPathRequested,
    ScriptLoaded {
        path: PathBuf,
        text: String,
    },
    ScriptLoadFailed {
        path: PathBuf,
        error: String,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    PollSystemSignals,
}
