use std::time::Instant;

/// Converts animation frames into elapsed seconds while scrolling is armed.
///
/// The host only subscribes to frames while [`FrameClock::is_armed`] is true;
/// disarming is the whole cancellation story.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    armed: bool,
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh play session; the next tick reports zero elapsed time.
    pub fn arm(&mut self) {
        self.armed = true;
        self.last_frame = None;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.last_frame = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Seconds since the previous tick, or `None` while disarmed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.armed {
            return None;
        }
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn disarmed_clock_yields_nothing() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(Instant::now()), None);
    }

    #[test]
    fn first_tick_after_arm_is_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.arm();
        assert_eq!(clock.tick(start), Some(0.0));
        let delta = clock.tick(start + Duration::from_millis(250)).unwrap_or_default();
        assert!((delta - 0.25).abs() < 1e-4);
    }

    #[test]
    fn rearming_discards_previous_frame() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.arm();
        clock.tick(start);
        clock.disarm();
        assert!(!clock.is_armed());
        clock.arm();
        assert_eq!(clock.tick(start + Duration::from_secs(5)), Some(0.0));
    }

    #[test]
    fn time_going_backwards_counts_as_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_secs(1);
        clock.arm();
        clock.tick(start);
        assert_eq!(clock.tick(start - Duration::from_millis(500)), Some(0.0));
    }
}
