/// Vertical extent of one segment inside the rendered content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentExtent {
    pub start: f32,
    pub height: f32,
}

impl SegmentExtent {
    pub fn bottom(&self) -> f32 {
        self.start + self.height
    }
}

/// Segment index to vertical extent, rebuilt whenever layout changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentGeometry {
    extents: Vec<SegmentExtent>,
}

impl SegmentGeometry {
    /// Stack rows of the given heights starting at `top`.
    pub fn from_heights(top: f32, heights: impl IntoIterator<Item = f32>) -> Self {
        let mut cursor = sanitize(top);
        let extents = heights
            .into_iter()
            .map(|height| {
                let height = sanitize(height);
                let extent = SegmentExtent {
                    start: cursor,
                    height,
                };
                cursor += height;
                extent
            })
            .collect();
        Self { extents }
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<SegmentExtent> {
        self.extents.get(idx).copied()
    }

    /// Bottom edge of the last row, or zero when empty.
    pub fn total_bottom(&self) -> f32 {
        self.extents.last().map(SegmentExtent::bottom).unwrap_or(0.0)
    }

    /// First index whose bottom edge lies strictly below `y`, else the last index.
    pub fn index_at(&self, y: f32) -> Option<usize> {
        if self.extents.is_empty() {
            return None;
        }
        self.extents
            .iter()
            .position(|extent| extent.bottom() > y)
            .or(Some(self.extents.len() - 1))
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
