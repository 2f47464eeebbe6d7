use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Fixed height of the status bar under the script.
pub(crate) const STATUS_BAR_HEIGHT_PX: f32 = 44.0;
pub(crate) const STATUS_BAR_PADDING_PX: u16 = 8;
/// Opacity of rows other than the one being read.
pub(crate) const INACTIVE_ROW_ALPHA: f32 = 0.45;
pub(crate) const SIGNAL_POLL_INTERVAL_MS: u64 = 250;
pub(crate) static SCRIPT_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("script-scroll"));
