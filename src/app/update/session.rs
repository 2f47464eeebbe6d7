use super::super::state::App;
use super::Effect;
use crate::session::SessionEvent;
use std::path::PathBuf;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_open_path_input_changed(&mut self, path: String) {
        self.open_path_input = path;
    }

    pub(super) fn handle_open_path_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.script_loading {
            return;
        }
        let trimmed = self.open_path_input.trim();
        if trimmed.is_empty() {
            self.status_error = Some("Enter a path to a text file.".to_string());
            return;
        }
        let path = PathBuf::from(trimmed);
        info!(path = %path.display(), "Loading script");
        self.script_loading = true;
        self.status_error = None;
        effects.push(Effect::LoadScript(path));
    }

    pub(super) fn handle_script_loaded(
        &mut self,
        path: PathBuf,
        text: String,
        effects: &mut Vec<Effect>,
    ) {
        self.script_loading = false;
        if let SessionEvent::Opened {
            segments,
            window_height_class,
        } = self.open_script(path, text)
        {
            debug!(segments, ?window_height_class, "Script ready");
            effects.push(Effect::ResizeWindow(window_height_class));
        }
        if let Some(controller) = self.controller() {
            effects.push(Effect::ScrollTo(controller.offset()));
        }
    }

    pub(super) fn handle_script_load_failed(&mut self, path: PathBuf, error: String) {
        self.script_loading = false;
        warn!(path = %path.display(), %error, "Failed to load script");
        self.status_error = Some(format!("Could not open {}: {error}", path.display()));
    }
}
