use super::super::state::App;
use super::Effect;
use crate::prompter::Advance;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(delta) = self.clock.tick(now) else {
            return;
        };
        let Some(controller) = self.controller_mut() else {
            return;
        };
        match controller.advance(delta) {
            Advance::Idle => {}
            Advance::Scrolled => effects.push(Effect::ScrollTo(controller.offset())),
            Advance::Finished => {
                effects.push(Effect::ScrollTo(controller.offset()));
                info!(offset = controller.offset(), "Reached end of script");
            }
        }
    }

    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        let viewport_changed = viewport_height.is_finite()
            && viewport_height > 0.0
            && self.viewport.reported_height != Some(viewport_height);
        if viewport_changed {
            self.viewport.reported_height = Some(viewport_height);
            debug!(viewport_height, content_height, "Viewport reported by view");
            self.refresh_geometry();
        }

        let Some(controller) = self.controller_mut() else {
            return;
        };
        // While playing, the controller owns the offset and the view follows it.
        if !controller.is_playing() && (controller.offset() - offset_y).abs() > f32::EPSILON {
            controller.sync_offset(offset_y);
            debug!(offset = controller.offset(), "Synced offset from manual scroll");
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if self.viewport.window_width == width && self.viewport.window_height == height {
            return;
        }
        self.viewport.window_width = width;
        self.viewport.window_height = height;
        // The scrollable reports its real bounds on the next scroll event.
        self.viewport.reported_height = None;
        debug!(width, height, "Window resized");
        self.refresh_geometry();
    }
}
