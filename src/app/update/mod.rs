use crate::config::WindowHeightClass;
use std::path::PathBuf;

mod core;
mod navigation;
mod scroll;
mod session;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ScrollTo(f32),
    LoadScript(PathBuf),
    SetWindowLevel { always_on_top: bool },
    ResizeWindow(WindowHeightClass),
    Exit,
}
