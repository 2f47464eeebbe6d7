use crate::app::layout::viewport_height_for_window;

/// Window and viewport tracking model.
pub struct ViewportState {
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
    /// Viewport height as last reported by the scrollable itself.
    pub(in crate::app) reported_height: Option<f32>,
}

impl ViewportState {
    pub(in crate::app) fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            window_width,
            window_height,
            reported_height: None,
        }
    }

    /// Prefer the measured viewport; fall back to the window minus chrome.
    pub(in crate::app) fn viewport_height(&self) -> f32 {
        self.reported_height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or_else(|| viewport_height_for_window(self.window_height))
    }
}
