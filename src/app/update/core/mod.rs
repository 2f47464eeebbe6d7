mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL_MS};
use iced::event;
use iced::time;
use iced::window;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(Duration::from_millis(SIGNAL_POLL_INTERVAL_MS))
                .map(|_| Message::PollSystemSignals),
        ];

        if app.clock.is_armed() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
