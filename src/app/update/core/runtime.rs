use super::super::super::messages::Message;
use super::super::super::state::{App, SCRIPT_SCROLL_ID};
use super::super::Effect;
use crate::script_loader::load_script;
use iced::Event;
use iced::Size;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(offset) => scrollable::scroll_to(
                SCRIPT_SCROLL_ID.clone(),
                AbsoluteOffset { x: 0.0, y: offset },
            ),
            Effect::LoadScript(path) => Task::perform(
                async move {
                    match load_script(&path) {
                        Ok(text) => Message::ScriptLoaded { path, text },
                        Err(err) => Message::ScriptLoadFailed {
                            path,
                            error: format!("{err:#}"),
                        },
                    }
                },
                |message| message,
            ),
            Effect::SetWindowLevel { always_on_top } => {
                let level = if always_on_top {
                    window::Level::AlwaysOnTop
                } else {
                    window::Level::Normal
                };
                info!(always_on_top, "Changing window level");
                window::get_oldest().and_then(move |id| window::change_level(id, level))
            }
            Effect::ResizeWindow(class) => {
                let size = Size::new(self.viewport.window_width, class.height_px());
                window::get_oldest().and_then(move |id| window::resize(id, size))
            }
            Effect::Exit => {
                info!("Exiting teleprompter");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
