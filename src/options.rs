use alloc::sync::Arc;

use crate::{Length, Mode};

/// Default throttle window for scroll handling.
pub const DEFAULT_THROTTLE_MS: u64 = 100;
/// Distance from the bottom (in pixels) at which the next page is requested.
pub const DEFAULT_NEAR_BOTTOM: f32 = 50.0;
/// Extra pixels added below the last row when sizing the outer wrapper.
pub const DEFAULT_SLACK: f32 = 50.0;

/// Populates one empty row container.
///
/// Arguments: the row container, the item, its index inside `page_items`, and the slice being
/// rendered in this pass (the fetched page in append mode, the visible window in windowed
/// mode).
pub type RenderItem<T, R> = Arc<dyn Fn(&mut R, &T, usize, &[T]) + Send + Sync>;

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: the render callback lives in an `Arc`.
pub struct ListOptions<T, R> {
    pub mode: Mode,
    pub render_item: RenderItem<T, R>,
    /// Viewport height. [`Length::Auto`] measures the mounted container.
    pub height: Length,
    /// Items requested per load. `0` derives it from the viewport: `ceil(viewport / item_height) + 1`.
    pub page_size: usize,
    /// Fixed row height. When `None`, rows are measured after layout.
    pub item_height: Option<f32>,

    pub throttle_ms: u64,
    pub near_bottom: f32,
    pub slack: f32,
}

impl<T, R> Clone for ListOptions<T, R> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            render_item: Arc::clone(&self.render_item),
            height: self.height,
            page_size: self.page_size,
            item_height: self.item_height,
            throttle_ms: self.throttle_ms,
            near_bottom: self.near_bottom,
            slack: self.slack,
        }
    }
}

impl<T, R> ListOptions<T, R> {
    /// Creates append-mode options with a measured viewport and a derived page size.
    pub fn new(render_item: impl Fn(&mut R, &T, usize, &[T]) + Send + Sync + 'static) -> Self {
        Self {
            mode: Mode::Append,
            render_item: Arc::new(render_item),
            height: Length::Auto,
            page_size: 0,
            item_height: None,
            throttle_ms: DEFAULT_THROTTLE_MS,
            near_bottom: DEFAULT_NEAR_BOTTOM,
            slack: DEFAULT_SLACK,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_render_item(
        mut self,
        render_item: impl Fn(&mut R, &T, usize, &[T]) + Send + Sync + 'static,
    ) -> Self {
        self.render_item = Arc::new(render_item);
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_item_height(mut self, item_height: Option<f32>) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_near_bottom(mut self, near_bottom: f32) -> Self {
        self.near_bottom = near_bottom;
        self
    }

    pub fn with_slack(mut self, slack: f32) -> Self {
        self.slack = slack;
        self
    }
}

impl<T, R> core::fmt::Debug for ListOptions<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("mode", &self.mode)
            .field("height", &self.height)
            .field("page_size", &self.page_size)
            .field("item_height", &self.item_height)
            .field("throttle_ms", &self.throttle_ms)
            .field("near_bottom", &self.near_bottom)
            .field("slack", &self.slack)
            .finish_non_exhaustive()
    }
}
