use super::super::state::App;
use super::Effect;
use crate::prompter::{Direction, Intent};
use crate::session::{SessionCommand, SessionEvent};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_intent(&mut self, intent: Intent, effects: &mut Vec<Effect>) {
        match intent {
            Intent::PlayPause => {
                if let Some(controller) = self.controller_mut() {
                    controller.toggle_play();
                }
            }
            Intent::StepNext => self.move_in_direction(Direction::Down, effects),
            Intent::StepPrev => self.move_in_direction(Direction::Up, effects),
            Intent::SpeedUp => self.nudge_speed(1),
            Intent::SpeedDown => self.nudge_speed(-1),
            Intent::Reset => {
                if let Some(controller) = self.controller_mut() {
                    controller.reset();
                    effects.push(Effect::ScrollTo(controller.offset()));
                }
            }
            Intent::ToggleAlwaysOnTop => {
                if let SessionEvent::AlwaysOnTopChanged(always_on_top) =
                    self.sessions.handle(SessionCommand::ToggleAlwaysOnTop)
                {
                    effects.push(Effect::SetWindowLevel { always_on_top });
                }
            }
            Intent::Close => self.handle_close(effects),
        }
    }

    pub(super) fn handle_speed_changed(&mut self, speed: u8) {
        if let Some(controller) = self.controller_mut() {
            controller.set_speed(speed as i32);
            debug!(speed = controller.speed(), "Speed changed");
        }
    }

    fn nudge_speed(&mut self, step: i32) {
        if let Some(controller) = self.controller_mut() {
            controller.set_speed(controller.speed() as i32 + step);
            debug!(speed = controller.speed(), "Speed changed");
        }
    }

    fn move_in_direction(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        let Some(controller) = self.controller_mut() else {
            return;
        };
        controller.navigate(direction);
        effects.push(Effect::ScrollTo(controller.offset()));
    }

    /// Closing a script returns to the waiting screen; closing that quits.
    fn handle_close(&mut self, effects: &mut Vec<Effect>) {
        match self.sessions.handle(SessionCommand::Close) {
            SessionEvent::Closed => {
                self.script_path = None;
                info!("Returned to waiting screen");
            }
            _ => effects.push(Effect::Exit),
        }
    }
}
