//! Scroll-timing engine.
//!
//! [`ScrollController`] owns the scroll state for one displayed script: the
//! current offset, play/pause, speed and the segment geometry supplied by the
//! host's layout oracle. Every operation clamps its inputs; nothing here can
//! fail, and an empty controller (no script loaded) ignores every call.

mod clock;
mod geometry;
mod intent;

pub use clock::FrameClock;
pub use geometry::SegmentGeometry;
pub use intent::{Direction, Intent, Seek};

use crate::segmenter::Segment;
use tracing::debug;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
/// Scroll rate at speed zero, in px per second.
pub const BASE_PX_PER_SEC: f32 = 5.0;
/// Additional px per second for every speed step.
pub const PX_PER_SEC_PER_SPEED: f32 = 3.0;
/// Distance moved by a single manual line step.
pub const LINE_STEP_PX: f32 = 40.0;

/// Result of one [`ScrollController::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not playing; nothing happened.
    Idle,
    /// Still playing.
    Scrolled,
    /// Hit the end of the script and paused.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollState {
    offset: f32,
    playing: bool,
    speed: u8,
    max_offset: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            playing: false,
            speed: MIN_SPEED,
            max_offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    segments: Vec<Segment>,
    geometry: SegmentGeometry,
    state: ScrollState,
    viewport_height: f32,
}

pub fn clamp_speed(speed: i32) -> u8 {
    speed.clamp(MIN_SPEED as i32, MAX_SPEED as i32) as u8
}

pub fn px_per_second(speed: u8) -> f32 {
    BASE_PX_PER_SEC + speed as f32 * PX_PER_SEC_PER_SPEED
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the script; scroll state restarts paused at the top.
    pub fn load(&mut self, segments: Vec<Segment>, speed: u8) {
        self.segments = segments;
        self.geometry = SegmentGeometry::default();
        self.state = ScrollState {
            speed: clamp_speed(speed as i32),
            ..ScrollState::default()
        };
        debug!(segments = self.segments.len(), speed, "Loaded script into controller");
    }

    pub fn is_loaded(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[cfg(test)]
    pub fn geometry(&self) -> &SegmentGeometry {
        &self.geometry
    }

    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.state.max_offset
    }

    pub fn speed(&self) -> u8 {
        self.state.speed
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Fraction of the script scrolled past, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.state.max_offset <= 0.0 {
            return 0.0;
        }
        (self.state.offset / self.state.max_offset).clamp(0.0, 1.0)
    }

    pub fn toggle_play(&mut self) {
        if !self.is_loaded() {
            return;
        }
        self.state.playing = !self.state.playing;
        debug!(playing = self.state.playing, offset = self.state.offset, "Toggled playback");
    }

    pub fn reset(&mut self) {
        self.state.offset = 0.0;
    }

    pub fn set_speed(&mut self, speed: i32) {
        if !self.is_loaded() {
            return;
        }
        self.state.speed = clamp_speed(speed);
    }

    pub fn set_geometry(&mut self, geometry: SegmentGeometry) {
        self.geometry = geometry;
    }

    /// Recompute the scroll range from fresh layout measurements.
    pub fn recompute_geometry(&mut self, content_height: f32, viewport_height: f32) {
        let content_height = finite_or_zero(content_height);
        let viewport_height = finite_or_zero(viewport_height);
        self.viewport_height = viewport_height;
        self.state.max_offset = (content_height - viewport_height).max(0.0);
        self.state.offset = self.clamp_offset(self.state.offset);
    }

    /// Move forward by the time elapsed since the previous frame.
    pub fn advance(&mut self, delta_seconds: f32) -> Advance {
        if !self.state.playing {
            return Advance::Idle;
        }
        let delta_seconds = finite_or_zero(delta_seconds);
        let candidate = self.state.offset + px_per_second(self.state.speed) * delta_seconds;
        self.state.offset = self.clamp_offset(candidate);

        if self.state.max_offset > 0.0 && self.state.offset >= self.state.max_offset {
            self.state.playing = false;
            debug!(offset = self.state.offset, "Reached end of script; pausing");
            return Advance::Finished;
        }
        Advance::Scrolled
    }

    pub fn step_line(&mut self, direction: Direction) {
        if !self.is_loaded() {
            return;
        }
        self.state.offset = self.clamp_offset(self.state.offset + direction.sign() * LINE_STEP_PX);
    }

    /// Adopt an offset the view reports after a manual scroll.
    pub fn sync_offset(&mut self, offset: f32) {
        if !self.is_loaded() {
            return;
        }
        self.state.offset = self.clamp_offset(finite_or_zero(offset));
    }

    /// Index of the segment under the viewport's vertical center.
    pub fn current_segment_index(&self) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }
        let center = self.state.offset + self.viewport_height * 0.5;
        let idx = self.geometry.index_at(center).unwrap_or(0);
        Some(idx.min(self.segments.len() - 1))
    }

    /// Center a segment in the viewport, walking past spacers and blank rows.
    ///
    /// Returns the index that was landed on.
    pub fn go_to_segment(&mut self, index: usize, seek: Option<Seek>) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }
        let last = self.segments.len() - 1;
        let index = index.min(last);

        let target = match seek {
            Some(Seek::Next) => self.walk_forward(index).unwrap_or(last),
            Some(Seek::Prev) => self.walk_backward(index).unwrap_or(0),
            None => self
                .walk_forward(index)
                .or_else(|| self.walk_backward(index))
                .unwrap_or(index),
        };

        if let Some(extent) = self.geometry.get(target) {
            let desired = extent.start - self.viewport_height * 0.5 + extent.height * 0.5;
            self.state.offset = self.clamp_offset(desired);
        }
        debug!(requested = index, landed = target, offset = self.state.offset, "Seeked to segment");
        Some(target)
    }

    /// Directional navigation: hop between segments, or nudge by a line at the ends.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(current) = self.current_segment_index() else {
            return;
        };
        let last = self.segments.len() - 1;
        if self.segments.len() > 1 {
            match direction {
                Direction::Down if current < last => {
                    self.go_to_segment(current + 1, Some(Seek::Next));
                    return;
                }
                Direction::Up if current > 0 => {
                    self.go_to_segment(current - 1, Some(Seek::Prev));
                    return;
                }
                _ => {}
            }
        }
        self.step_line(direction);
    }

    fn walk_forward(&self, from: usize) -> Option<usize> {
        (from..self.segments.len()).find(|&idx| !self.segments[idx].is_skip_target())
    }

    fn walk_backward(&self, from: usize) -> Option<usize> {
        (0..=from).rev().find(|&idx| !self.segments[idx].is_skip_target())
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.state.max_offset)
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    const ROW: f32 = 10.0;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    /// Controller with uniform rows and the given viewport.
    fn controller(segments: Vec<Segment>, viewport: f32) -> ScrollController {
        let count = segments.len();
        let mut c = ScrollController::new();
        c.load(segments, 5);
        c.set_geometry(SegmentGeometry::from_heights(0.0, vec![ROW; count]));
        c.recompute_geometry(count as f32 * ROW, viewport);
        c
    }

    fn assert_in_range(c: &ScrollController) {
        assert!(c.offset() >= 0.0 && c.offset() <= c.max_offset(), "offset out of range");
    }

    #[test]
    fn speed_model_matches_reading_rate() {
        assert_eq!(px_per_second(5), 20.0);
        let mut c = ScrollController::new();
        c.load(vec![text("a")], 5);
        c.recompute_geometry(200.0, 100.0);
        c.toggle_play();
        assert_eq!(c.advance(1.0), Advance::Scrolled);
        assert_eq!(c.offset(), 20.0);
    }

    #[test]
    fn advance_clamps_and_pauses_at_end() {
        let mut c = ScrollController::new();
        c.load(vec![text("a")], 1);
        c.recompute_geometry(115.0, 100.0);
        c.sync_offset(10.0);
        c.toggle_play();
        // 10 + 8 px/s * 1s = 18, beyond the 15px range.
        assert_eq!(c.advance(1.0), Advance::Finished);
        assert_eq!(c.offset(), 15.0);
        assert!(!c.is_playing());
    }

    #[test]
    fn zero_delta_never_moves() {
        let mut c = controller(vec![text("a"), text("b"), text("c")], 10.0);
        c.toggle_play();
        c.sync_offset(5.0);
        assert_eq!(c.advance(0.0), Advance::Scrolled);
        assert_eq!(c.offset(), 5.0);
        assert_eq!(c.advance(f32::NAN), Advance::Scrolled);
        assert_eq!(c.advance(-3.0), Advance::Scrolled);
        assert_eq!(c.offset(), 5.0);
    }

    #[test]
    fn paused_advance_is_idle() {
        let mut c = controller(vec![text("a"), text("b")], 5.0);
        assert_eq!(c.advance(10.0), Advance::Idle);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn degenerate_geometry_pins_offset_to_zero() {
        let mut c = controller(vec![text("a"), text("b")], 500.0);
        assert_eq!(c.max_offset(), 0.0);
        c.toggle_play();
        assert_eq!(c.advance(3.0), Advance::Scrolled);
        assert!(c.is_playing(), "no end-of-script stop with an empty range");
        c.step_line(Direction::Down);
        c.go_to_segment(1, None);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn unloaded_controller_ignores_everything() {
        let mut c = ScrollController::new();
        c.toggle_play();
        assert!(!c.is_playing());
        c.set_speed(9);
        assert_eq!(c.speed(), MIN_SPEED);
        c.navigate(Direction::Down);
        assert_eq!(c.go_to_segment(3, Some(Seek::Next)), None);
        assert_eq!(c.current_segment_index(), None);
        assert_eq!(c.advance(1.0), Advance::Idle);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn speed_is_clamped() {
        let mut c = controller(vec![text("a")], 5.0);
        c.set_speed(42);
        assert_eq!(c.speed(), MAX_SPEED);
        c.set_speed(-1);
        assert_eq!(c.speed(), MIN_SPEED);
    }

    #[test]
    fn recompute_clamps_existing_offset() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        c.sync_offset(80.0);
        assert_eq!(c.offset(), 80.0);
        c.recompute_geometry(100.0, 60.0);
        assert_eq!(c.max_offset(), 40.0);
        assert_eq!(c.offset(), 40.0);
        c.recompute_geometry(100.0, 60.0);
        assert_eq!(c.offset(), 40.0);
        c.recompute_geometry(f32::NAN, 60.0);
        assert_eq!(c.max_offset(), 0.0);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn reset_keeps_play_state() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        c.toggle_play();
        c.advance(2.0);
        assert!(c.offset() > 0.0);
        c.reset();
        assert_eq!(c.offset(), 0.0);
        assert!(c.is_playing());
    }

    #[test]
    fn step_line_moves_by_line_and_clamps() {
        let mut c = controller(vec![text("a"); 20], 100.0);
        c.step_line(Direction::Down);
        assert_eq!(c.offset(), LINE_STEP_PX);
        c.step_line(Direction::Down);
        c.step_line(Direction::Down);
        assert_eq!(c.offset(), 100.0);
        c.step_line(Direction::Up);
        assert_eq!(c.offset(), 60.0);
        for _ in 0..5 {
            c.step_line(Direction::Up);
        }
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn current_index_at_top_of_paragraphs() {
        let mut c = ScrollController::new();
        c.load(segment("Para one.\n\nPara two.", 200), 5);
        c.set_geometry(SegmentGeometry::from_heights(0.0, [100.0, 40.0, 100.0]));
        c.recompute_geometry(240.0, 150.0);
        assert_eq!(c.current_segment_index(), Some(0));

        // A viewport center below every row falls back to the last one.
        c.recompute_geometry(240.0, 1000.0);
        assert_eq!(c.current_segment_index(), Some(2));
    }

    #[test]
    fn current_index_tracks_viewport_center() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        assert_eq!(c.current_segment_index(), Some(1));
        c.sync_offset(35.0);
        assert_eq!(c.current_segment_index(), Some(4));
        c.sync_offset(80.0);
        assert_eq!(c.current_segment_index(), Some(9));
    }

    #[test]
    fn go_to_segment_centers_target() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        assert_eq!(c.go_to_segment(5, None), Some(5));
        // start 50 - 10 + 5
        assert_eq!(c.offset(), 45.0);
        assert_eq!(c.current_segment_index(), Some(5));
        assert_eq!(c.go_to_segment(99, None), Some(9));
        assert_eq!(c.offset(), c.max_offset());
        assert!(!c.is_playing());
    }

    #[test]
    fn go_to_segment_skips_spacers_and_blank_rows() {
        let segments = vec![
            text("a"),
            Segment::Spacer,
            text("  "),
            text("b"),
            Segment::Spacer,
            text("c"),
        ];
        let mut c = controller(segments, 20.0);
        assert_eq!(c.go_to_segment(1, Some(Seek::Next)), Some(3));
        assert_eq!(c.go_to_segment(2, Some(Seek::Prev)), Some(0));
        assert_eq!(c.go_to_segment(4, None), Some(5));
    }

    #[test]
    fn undirected_seek_falls_back_backwards_at_the_end() {
        let segments = vec![text("a"), text("b"), Segment::Spacer, text("")];
        let mut c = controller(segments, 10.0);
        assert_eq!(c.go_to_segment(2, None), Some(1));
    }

    #[test]
    fn directed_seek_stops_at_boundary_when_nothing_qualifies() {
        let segments = vec![Segment::Text(String::new()), text("a"), Segment::Spacer, text(" ")];
        let mut c = controller(segments, 10.0);
        assert_eq!(c.go_to_segment(2, Some(Seek::Next)), Some(3));
        assert_eq!(c.go_to_segment(0, Some(Seek::Prev)), Some(0));
    }

    #[test]
    fn navigate_hops_over_spacers() {
        let mut c = ScrollController::new();
        c.load(segment("one\n\ntwo\n\nthree", 72), 5);
        c.set_geometry(SegmentGeometry::from_heights(0.0, [ROW; 5]));
        c.recompute_geometry(50.0, 10.0);

        assert_eq!(c.current_segment_index(), Some(0));
        c.navigate(Direction::Down);
        assert_eq!(c.current_segment_index(), Some(2));
        c.navigate(Direction::Down);
        assert_eq!(c.current_segment_index(), Some(4));
        c.navigate(Direction::Up);
        assert_eq!(c.current_segment_index(), Some(2));
    }

    #[test]
    fn navigate_falls_back_to_line_steps_at_edges() {
        let mut c = controller(vec![text("a"), text("b")], 10.0);
        c.recompute_geometry(200.0, 10.0);
        c.go_to_segment(1, None);
        let before = c.offset();
        c.navigate(Direction::Down);
        assert_eq!(c.offset(), before + LINE_STEP_PX);

        c.reset();
        c.navigate(Direction::Up);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn single_segment_always_steps_lines() {
        let mut c = controller(vec![text("only")], 10.0);
        c.recompute_geometry(500.0, 10.0);
        c.navigate(Direction::Down);
        assert_eq!(c.offset(), LINE_STEP_PX);
        c.navigate(Direction::Up);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn offset_stays_in_range_through_mixed_operations() {
        let mut c = controller(segment(&"word ".repeat(300), 30), 37.0);
        c.toggle_play();
        for step in 0..200 {
            match step % 7 {
                0 => {
                    c.advance(0.37);
                }
                1 => c.navigate(Direction::Down),
                2 => c.step_line(Direction::Up),
                3 => {
                    c.go_to_segment(step * 3, None);
                }
                4 => c.recompute_geometry(step as f32 * 2.0, 37.0),
                5 => c.navigate(Direction::Up),
                _ => c.sync_offset(step as f32 * 11.0),
            }
            assert_in_range(&c);
        }
    }

    #[test]
    fn load_resets_state() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        c.toggle_play();
        c.advance(1.0);
        c.load(vec![text("b")], 30);
        assert_eq!(c.offset(), 0.0);
        assert_eq!(c.max_offset(), 0.0);
        assert!(!c.is_playing());
        assert_eq!(c.speed(), MAX_SPEED);
        assert!(c.geometry().is_empty());
    }

    #[test]
    fn progress_is_fractional() {
        let mut c = controller(vec![text("a"); 10], 20.0);
        assert_eq!(c.progress(), 0.0);
        c.sync_offset(40.0);
        assert_eq!(c.progress(), 0.5);
    }
}
