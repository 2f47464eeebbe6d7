use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Intent(intent) => self.handle_intent(intent, &mut effects),
            Message::SpeedChanged(speed) => self.handle_speed_changed(speed),
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::OpenPathInputChanged(path) => self.handle_open_path_input_changed(path),
            Message::OpenPathRequested => self.handle_open_path_requested(&mut effects),
            Message::ScriptLoaded { path, text } => {
                self.handle_script_loaded(path, text, &mut effects);
            }
            Message::ScriptLoadFailed { path, error } => {
                self.handle_script_load_failed(path, error);
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(intent) = self.shortcut_intent_for_key(key, modifiers) {
                    debug!(%intent, "Shortcut matched");
                    effects.extend(self.reduce(Message::Intent(intent)));
                }
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_height, content_height),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
        }

        self.sync_clock();
        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            effects.push(Effect::Exit);
        }
    }
}
