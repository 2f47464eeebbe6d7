use super::layout::LayoutModel;
use super::messages::Message;
use super::state::{App, SCRIPT_SCROLL_ID, STATUS_BAR_HEIGHT_PX, STATUS_BAR_PADDING_PX};
use crate::config::Alignment;
use crate::prompter::{Intent, MAX_SPEED, MIN_SPEED, ScrollController};
use crate::segmenter::Segment;
use crate::session::Session;
use iced::alignment::Vertical;
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, row, scrollable, slider, text,
    text_input,
};
use iced::{Color, Element, Length, Padding};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.sessions.active() {
            Some(session) => self.script_view(session),
            None => self.waiting_view(),
        };

        column![
            container(body).width(Length::Fill).height(Length::Fill),
            self.status_bar()
        ]
        .into()
    }

    fn script_view<'a>(&'a self, session: &'a Session) -> Element<'a, Message> {
        let layout = LayoutModel::from_config(&self.config);
        let controller = &session.controller;
        let current = controller.current_segment_index();

        let rows = controller
            .segments()
            .iter()
            .enumerate()
            .map(|(idx, segment)| {
                self.segment_row(
                    segment,
                    layout.row_height(segment),
                    session.config.alignment,
                    Some(idx) == current,
                )
            });

        let content = Column::with_children(rows)
            .width(Length::Fill)
            .padding(Padding {
                top: self.config.margin_vertical as f32,
                bottom: self.config.margin_vertical as f32,
                left: self.config.margin_horizontal as f32,
                right: self.config.margin_horizontal as f32,
            });

        scrollable(content)
            .id(SCRIPT_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .into()
    }

    /// Rows must be exactly as tall as the layout model says.
    fn segment_row<'a>(
        &self,
        segment: &'a Segment,
        height: f32,
        alignment: Alignment,
        active: bool,
    ) -> Element<'a, Message> {
        match segment {
            Segment::Spacer => Space::with_height(Length::Fixed(height)).into(),
            Segment::Text(line) => container(
                text(line.as_str())
                    .size(self.config.font_size as f32)
                    .line_height(LineHeight::Relative(self.config.line_spacing))
                    .wrapping(Wrapping::None)
                    .width(Length::Fill)
                    .align_x(alignment.horizontal())
                    .color(self.text_color(active)),
            )
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_y(alignment.vertical())
            .clip(true)
            .into(),
        }
    }

    fn waiting_view(&self) -> Element<'_, Message> {
        let open_button = if self.script_loading {
            button("Loading...")
        } else {
            button("Open").on_press(Message::OpenPathRequested)
        };

        let prompt = column![
            text("No script open").size(24).color(self.text_color(true)),
            row![
                text_input("Path to a text file", &self.open_path_input)
                    .on_input(Message::OpenPathInputChanged)
                    .on_submit(Message::OpenPathRequested)
                    .width(Length::Fill),
                open_button,
            ]
            .spacing(10)
            .align_y(Vertical::Center),
        ]
        .spacing(16)
        .max_width(640);

        container(prompt)
            .padding(24)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let controller = self.controller();
        let playing = controller.is_some_and(ScrollController::is_playing);
        let speed = controller.map_or(self.config.speed, ScrollController::speed);

        let play_button = button(if playing { "Pause" } else { "Play" })
            .on_press_maybe(controller.map(|_| Message::Intent(Intent::PlayPause)));
        let speed_slider = slider(MIN_SPEED..=MAX_SPEED, speed, Message::SpeedChanged)
            .width(Length::Fixed(120.0));
        let pin_button = button(if self.sessions.always_on_top() {
            "Pinned"
        } else {
            "Pin"
        })
        .on_press(Message::Intent(Intent::ToggleAlwaysOnTop));
        let close_button = button("Close").on_press(Message::Intent(Intent::Close));

        let mut bar = row![
            play_button,
            text(format!("Speed {speed}")),
            speed_slider,
            text(segment_label(controller)),
            text(progress_label(controller)),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        if let Some(error) = &self.status_error {
            bar = bar.push(
                text(error.as_str())
                    .color(Color::from_rgb(0.9, 0.35, 0.3))
                    .wrapping(Wrapping::None),
            );
        }

        bar = bar
            .push(horizontal_space())
            .push(pin_button)
            .push(close_button);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(STATUS_BAR_HEIGHT_PX))
            .padding(STATUS_BAR_PADDING_PX)
            .align_y(Vertical::Center)
            .into()
    }
}

fn segment_label(controller: Option<&ScrollController>) -> String {
    match controller {
        Some(controller) if controller.is_loaded() => {
            let total = controller.segments().len();
            let current = controller.current_segment_index().map_or(0, |idx| idx + 1);
            format!("{current} / {total}")
        }
        _ => "- / -".to_string(),
    }
}

fn progress_label(controller: Option<&ScrollController>) -> String {
    let progress = controller.map_or(0.0, ScrollController::progress);
    format!("{:.0}%", progress * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    #[test]
    fn labels_without_a_session() {
        assert_eq!(segment_label(None), "- / -");
        assert_eq!(progress_label(None), "0%");
    }

    #[test]
    fn segment_label_is_one_based() {
        let mut controller = ScrollController::new();
        controller.load(segment("one\n\ntwo", 72), 5);
        assert_eq!(segment_label(Some(&controller)), "1 / 3");
    }
}
