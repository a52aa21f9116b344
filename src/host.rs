use alloc::vec::Vec;

use crate::Indicator;

/// The mount target a [`crate::VirtualList`] renders into.
///
/// A host owns the real UI objects: a scroll container, an inner wrapper that can be
/// translated along the scroll axis, the row containers inside it, and a trailing indicator
/// region. The list never holds UI state of its own; it drives the host through this trait.
///
/// Geometry contract: row heights are only read from [`Host::row_height`] during
/// [`crate::VirtualList::on_layout`], which the host calls after committing the rows it was
/// handed (the "next frame" of a browser, or the layout pass of a retained-mode toolkit).
pub trait Host {
    /// An empty row container, filled by the list's `render_item` callback.
    type Row;

    /// Builds the scaffold (scroll container, translatable wrapper, trailing indicator).
    ///
    /// `fixed_height` is `Some` when the viewport height is configured explicitly.
    fn mount(&mut self, fixed_height: Option<f32>);

    /// Measured height of the scroll container.
    fn container_height(&self) -> f32;

    fn scroll_top(&self) -> f32;

    /// Full scrollable extent of the container.
    fn scroll_height(&self) -> f32;

    /// Creates an empty row container for buffer index `index`.
    fn create_row(&mut self, index: usize) -> Self::Row;

    /// Appends rows after the existing ones.
    fn append_rows(&mut self, rows: Vec<Self::Row>);

    /// Replaces every mounted row.
    fn replace_rows(&mut self, rows: Vec<Self::Row>);

    /// Translates the inner wrapper along the scroll axis.
    fn set_translate(&mut self, offset: f32);

    /// Sets the height of the outer wrapper so the scrollbar reflects the whole list.
    fn set_content_height(&mut self, height: f32);

    fn set_indicator(&mut self, indicator: Indicator);

    /// Schedules a layout pass; the host answers by calling
    /// [`crate::VirtualList::on_layout`] once the rows are committed.
    fn request_layout(&mut self);

    /// Committed height of the row for buffer index `index`, or `None` if that row is not
    /// mounted or not laid out yet.
    fn row_height(&self, index: usize) -> Option<f32>;
}
