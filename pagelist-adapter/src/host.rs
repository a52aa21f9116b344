use std::sync::Arc;

use pagelist::{Host, Indicator};

/// Height of a row given its index and rendered content.
pub type RowHeightFn = Arc<dyn Fn(usize, &str) -> f32 + Send + Sync>;

/// A row container of [`MemoryHost`]. `render_item` callbacks write into `content`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRow {
    pub index: usize,
    pub content: String,
}

/// An in-memory scroll container.
///
/// Useful for tests, simulations and as a template for real hosts. It models the one
/// property the list relies on: row geometry becomes readable only after a layout pass
/// ([`MemoryHost::layout`]) that follows the row mutation.
#[derive(Clone)]
pub struct MemoryHost {
    container_height: f32,
    fixed_height: Option<f32>,
    scroll_top: f32,
    rows: Vec<MemoryRow>,
    translate: f32,
    content_height: Option<f32>,
    indicator: Option<Indicator>,
    indicator_height: f32,
    row_height: RowHeightFn,
    laid_out: bool,
    layout_requested: bool,
}

impl MemoryHost {
    /// A container of `container_height` pixels whose rows are all `row_height` tall.
    pub fn new(container_height: f32, row_height: f32) -> Self {
        Self::with_row_height(container_height, move |_, _| row_height)
    }

    /// A container whose row heights depend on the row index and content.
    pub fn with_row_height(
        container_height: f32,
        row_height: impl Fn(usize, &str) -> f32 + Send + Sync + 'static,
    ) -> Self {
        Self {
            container_height,
            fixed_height: None,
            scroll_top: 0.0,
            rows: Vec::new(),
            translate: 0.0,
            content_height: None,
            indicator: None,
            indicator_height: 40.0,
            row_height: Arc::new(row_height),
            laid_out: false,
            layout_requested: false,
        }
    }

    pub fn with_indicator_height(mut self, indicator_height: f32) -> Self {
        self.indicator_height = indicator_height;
        self
    }

    /// Visible height: the fixed height if one was mounted, else the container height.
    pub fn viewport_height(&self) -> f32 {
        self.fixed_height.unwrap_or(self.container_height)
    }

    pub fn rows(&self) -> &[MemoryRow] {
        &self.rows
    }

    pub fn translate(&self) -> f32 {
        self.translate
    }

    pub fn content_height(&self) -> Option<f32> {
        self.content_height
    }

    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    pub fn layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// Scrolls to `top`, clamped to the scrollable range. Returns the applied offset.
    pub fn scroll_to(&mut self, top: f32) -> f32 {
        let max = (self.scroll_height() - self.viewport_height()).max(0.0);
        self.scroll_top = top.clamp(0.0, max);
        self.scroll_top
    }

    pub fn scroll_to_bottom(&mut self) -> f32 {
        self.scroll_to(f32::MAX)
    }

    /// Commits pending row mutations.
    ///
    /// Returns `true` if the list asked for a layout pass since the last one, meaning
    /// `VirtualList::on_layout` should run now.
    pub fn layout(&mut self) -> bool {
        self.laid_out = true;
        std::mem::take(&mut self.layout_requested)
    }

    fn rows_extent(&self) -> f32 {
        self.rows
            .iter()
            .map(|r| (self.row_height)(r.index, &r.content))
            .sum()
    }
}

impl Host for MemoryHost {
    type Row = MemoryRow;

    fn mount(&mut self, fixed_height: Option<f32>) {
        self.fixed_height = fixed_height;
        self.rows.clear();
        self.translate = 0.0;
        self.content_height = None;
        self.scroll_top = 0.0;
    }

    fn container_height(&self) -> f32 {
        self.container_height
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f32 {
        let flow = self.translate + self.rows_extent() + self.indicator_height;
        flow.max(self.content_height.unwrap_or(0.0))
            .max(self.viewport_height())
    }

    fn create_row(&mut self, index: usize) -> MemoryRow {
        MemoryRow {
            index,
            content: String::new(),
        }
    }

    fn append_rows(&mut self, rows: Vec<MemoryRow>) {
        self.rows.extend(rows);
        self.laid_out = false;
    }

    fn replace_rows(&mut self, rows: Vec<MemoryRow>) {
        self.rows = rows;
        self.laid_out = false;
    }

    fn set_translate(&mut self, offset: f32) {
        self.translate = offset;
    }

    fn set_content_height(&mut self, height: f32) {
        self.content_height = Some(height);
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.indicator = Some(indicator);
    }

    fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    fn row_height(&self, index: usize) -> Option<f32> {
        if !self.laid_out {
            return None;
        }
        self.rows
            .iter()
            .find(|r| r.index == index)
            .map(|r| (self.row_height)(r.index, &r.content))
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("container_height", &self.container_height)
            .field("fixed_height", &self.fixed_height)
            .field("scroll_top", &self.scroll_top)
            .field("rows", &self.rows.len())
            .field("translate", &self.translate)
            .field("content_height", &self.content_height)
            .field("indicator", &self.indicator)
            .field("laid_out", &self.laid_out)
            .finish_non_exhaustive()
    }
}
