use crate::{LoadStatus, Window};

/// A lightweight, serializable snapshot of pagination and windowing state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub page: usize,
    pub page_size: usize,
    pub status: LoadStatus,
    /// Number of buffered items.
    pub len: usize,
    /// Number of measured rows in the position cache.
    pub measured: usize,
    pub viewport_height: f32,
    /// The mounted window (windowed mode only).
    pub window: Option<Window>,
}
