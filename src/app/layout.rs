//! Fixed-row layout model.
//!
//! Every segment is painted as a row of known height, so the geometry handed to
//! the scroll controller matches what the view draws. Keep these values in sync
//! with `view.rs`.

use super::state::STATUS_BAR_HEIGHT_PX;
use crate::config::AppConfig;
use crate::prompter::SegmentGeometry;
use crate::segmenter::Segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayoutModel {
    pub(crate) line_height: f32,
    pub(crate) spacer_height: f32,
    pub(crate) margin_vertical: f32,
}

impl LayoutModel {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        let line_height = config.font_size as f32 * config.line_spacing;
        Self {
            line_height,
            spacer_height: line_height * config.spacer_lines,
            margin_vertical: config.margin_vertical as f32,
        }
    }

    pub(crate) fn row_height(&self, segment: &Segment) -> f32 {
        if segment.is_spacer() {
            self.spacer_height
        } else {
            segment.text().lines().count().max(1) as f32 * self.line_height
        }
    }

    pub(crate) fn geometry(&self, segments: &[Segment]) -> SegmentGeometry {
        SegmentGeometry::from_heights(
            self.margin_vertical,
            segments.iter().map(|segment| self.row_height(segment)),
        )
    }

    /// Full scrollable height including the bottom margin.
    pub(crate) fn content_height(&self, geometry: &SegmentGeometry) -> f32 {
        if geometry.is_empty() {
            return 0.0;
        }
        geometry.total_bottom() + self.margin_vertical
    }
}

/// Height left for the script once the status bar is drawn.
pub(crate) fn viewport_height_for_window(window_height: f32) -> f32 {
    if !window_height.is_finite() {
        return 0.0;
    }
    (window_height - STATUS_BAR_HEIGHT_PX).max(0.0)
}
