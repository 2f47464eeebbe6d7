/// Everything a keypress can ask the prompter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PlayPause,
    StepNext,
    StepPrev,
    SpeedUp,
    SpeedDown,
    Reset,
    ToggleAlwaysOnTop,
    Close,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::PlayPause,
        Intent::StepNext,
        Intent::StepPrev,
        Intent::SpeedUp,
        Intent::SpeedDown,
        Intent::Reset,
        Intent::ToggleAlwaysOnTop,
        Intent::Close,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Intent::PlayPause => "play/pause",
            Intent::StepNext => "next segment",
            Intent::StepPrev => "previous segment",
            Intent::SpeedUp => "speed up",
            Intent::SpeedDown => "speed down",
            Intent::Reset => "reset",
            Intent::ToggleAlwaysOnTop => "always on top",
            Intent::Close => "close",
        };
        write!(f, "{}", label)
    }
}

/// Screen direction for manual movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Which way [`super::ScrollController::go_to_segment`] walks past skip targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seek {
    Next,
    Prev,
}
