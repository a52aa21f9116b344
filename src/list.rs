use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;
use core::ops::Range;

use crate::error::{Error, Result};
use crate::host::Host;
use crate::loader::PageLoader;
use crate::positions::PositionCache;
use crate::throttle::Throttle;
use crate::{
    Indicator, ListOptions, ListState, LoadStatus, Mode, PageRequest, PageStatus, Window,
};

/// A paginated list that loads pages on demand and, in [`Mode::Windowed`], mounts only the
/// rows under the viewport.
///
/// The list is headless. It owns the data buffer, the position cache and the pagination
/// bookkeeping; all UI work goes through its [`Host`]. Adapters drive it by:
/// - registering a loader with [`VirtualList::load`],
/// - forwarding scroll events to [`VirtualList::on_scroll`] and calling
///   [`VirtualList::tick`] on a timer so throttled events are not lost,
/// - calling [`VirtualList::on_layout`] after committing rows the list asked to measure,
/// - answering each [`PageRequest`] with [`VirtualList::complete`] or [`VirtualList::render`].
///
/// At most one page request is in flight at a time: a request is only issued from
/// [`LoadStatus::Idle`].
pub struct VirtualList<T, H: Host> {
    host: H,
    options: ListOptions<T, H::Row>,
    loader: Option<Box<dyn PageLoader>>,

    items: Vec<T>,
    positions: PositionCache,
    window: Option<Window>,
    pending_layout: Option<Range<usize>>,
    // The buffer grew since the window was last painted.
    dirty: bool,

    page: usize,
    page_size: usize,
    status: LoadStatus,
    generation: u64,
    // The next request re-issues `page` instead of advancing it.
    reissue: bool,

    viewport_height: f32,
    throttle: Throttle,
}

impl<T, H: Host> VirtualList<T, H> {
    /// Mounts the list into `host`.
    ///
    /// Resolves the viewport height (fixed or measured from the container) and the page size,
    /// then shows the loading indicator.
    pub fn new(mut host: H, options: ListOptions<T, H::Row>) -> Result<Self> {
        if let Some(h) = options.item_height {
            if !(h.is_finite() && h > 0.0) {
                return Err(Error::InvalidItemHeight(h));
            }
        }
        if options.page_size == 0 && options.item_height.is_none() {
            return Err(Error::UnresolvedPageSize);
        }

        let fixed = options.height.fixed();
        host.mount(fixed);
        let viewport_height = fixed.unwrap_or_else(|| host.container_height().max(0.0));
        let page_size = resolve_page_size(options.page_size, options.item_height, viewport_height);
        host.set_indicator(Indicator::Loading);

        pdebug!(
            mode = ?options.mode,
            viewport_height,
            page_size,
            item_height = ?options.item_height,
            "VirtualList::new"
        );

        Ok(Self {
            host,
            throttle: Throttle::new(options.throttle_ms),
            options,
            loader: None,
            items: Vec::new(),
            positions: PositionCache::new(),
            window: None,
            pending_layout: None,
            dirty: false,
            page: 0,
            page_size,
            status: LoadStatus::Idle,
            generation: 0,
            reissue: false,
            viewport_height,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &ListOptions<T, H::Row> {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    /// Every item fetched since construction (or the last clearing reset).
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// The currently mounted window (windowed mode only).
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn positions(&self) -> &PositionCache {
        &self.positions
    }

    pub fn state(&self) -> ListState {
        ListState {
            page: self.page,
            page_size: self.page_size,
            status: self.status,
            len: self.items.len(),
            measured: self.positions.len(),
            viewport_height: self.viewport_height,
            window: self.window,
        }
    }

    /// Registers the loader and requests the first page.
    pub fn load(&mut self, loader: impl PageLoader + 'static) {
        self.loader = Some(Box::new(loader));
        self.request_next();
    }

    /// Pushes a fetched page.
    ///
    /// A pending load settles into the state matching `status`. Data is appended unless
    /// `status` is [`PageStatus::Failed`]; an empty `data` with [`PageStatus::More`] only
    /// repaints.
    pub fn render(&mut self, data: impl IntoIterator<Item = T>, status: PageStatus) {
        if self.status == LoadStatus::Loading {
            self.set_status(status.load_status());
        } else if status == PageStatus::Failed {
            pwarn!(status = ?self.status, "render: failure reported without a pending load");
        }
        if !status.carries_data() {
            return;
        }

        let from = self.items.len();
        self.items.extend(data);
        let appended = self.items.len() - from;
        ptrace!(appended, len = self.items.len(), "render");

        match self.options.mode {
            Mode::Append => self.append_rows(from),
            Mode::Windowed => {
                if appended > 0 {
                    self.dirty = true;
                }
                self.paint_window();
            }
        }
    }

    /// Delivers the response to `request`.
    ///
    /// Returns `false` (and drops the data) when the request predates a `reset` or `cancel`.
    pub fn complete(
        &mut self,
        request: PageRequest,
        data: impl IntoIterator<Item = T>,
        status: PageStatus,
    ) -> bool {
        if request.generation != self.generation {
            pdebug!(
                page = request.page,
                stale = request.generation,
                current = self.generation,
                "complete: dropping stale response"
            );
            return false;
        }
        self.render(data, status);
        true
    }

    /// Sets the load status and the matching indicator, independent of data.
    pub fn set_status(&mut self, status: LoadStatus) {
        ptrace!(from = ?self.status, to = ?status, "set_status");
        self.status = status;
        self.host.set_indicator(status.into());
    }

    /// Re-issues the failed request for the same page. No-op unless the status is
    /// [`LoadStatus::Error`].
    pub fn retry(&mut self) -> bool {
        if self.status != LoadStatus::Error {
            return false;
        }
        pdebug!(page = self.page, "retry");
        self.status = LoadStatus::Idle;
        self.reissue = true;
        self.request_next()
    }

    /// Abandons the in-flight request. Its response will be dropped by
    /// [`VirtualList::complete`], and the next request asks for the same page again.
    pub fn cancel(&mut self) -> bool {
        if self.status != LoadStatus::Loading {
            return false;
        }
        pdebug!(page = self.page, "cancel");
        self.generation = self.generation.wrapping_add(1);
        self.reissue = true;
        self.set_status(LoadStatus::Idle);
        true
    }

    /// Restarts pagination from page 0.
    ///
    /// With `clear_buffer`, the buffer, the position cache and the mounted rows are dropped
    /// too; otherwise fetched items stay and the next pages are appended after them.
    pub fn reset(&mut self, clear_buffer: bool) {
        pdebug!(clear_buffer, len = self.items.len(), "reset");
        self.page = 0;
        self.generation = self.generation.wrapping_add(1);
        self.reissue = false;
        self.throttle.reset();
        self.set_status(LoadStatus::Idle);

        if clear_buffer {
            self.items.clear();
            self.positions.clear();
            self.window = None;
            self.pending_layout = None;
            self.dirty = false;
            self.host.replace_rows(Vec::new());
            self.host.set_translate(0.0);
            // Append mode never sizes the wrapper.
            if self.options.mode == Mode::Windowed {
                self.host.set_content_height(0.0);
            }
        }
    }

    /// Forwards a scroll event. Events are throttled to one per `throttle_ms`; call
    /// [`VirtualList::tick`] so the last event of a burst is still handled.
    pub fn on_scroll(&mut self, now_ms: u64) {
        if self.throttle.hit(now_ms) {
            self.handle_scroll();
        }
    }

    /// Handles a scroll event that was held back by the throttle, once its window elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        if self.throttle.flush(now_ms) {
            self.handle_scroll();
        }
    }

    /// Measures rows committed since the last windowed paint and grows the position cache.
    pub fn on_layout(&mut self) {
        let Some(range) = self.pending_layout.take() else {
            return;
        };
        let before = self.positions.len();
        for index in range {
            if index < self.positions.len() {
                continue;
            }
            let Some(height) = self.host.row_height(index) else {
                break;
            };
            self.positions.push(index, height);
        }

        let measured = self.positions.len() - before;
        pdebug!(measured, total = self.positions.len(), "on_layout");
        if measured > 0 {
            self.host
                .set_content_height(self.positions.extent() + self.options.slack);
        }
    }

    /// Updates the viewport height after the container was resized.
    ///
    /// A derived page size is recomputed; a configured one is kept.
    pub fn set_viewport_height(&mut self, height: f32) {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        if self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.page_size = resolve_page_size(self.options.page_size, self.options.item_height, height);
        ptrace!(height, page_size = self.page_size, "set_viewport_height");
        if self.options.mode == Mode::Windowed {
            self.paint_window();
        }
    }

    /// The window that would be mounted at `scroll_top`.
    pub fn window_at(&self, scroll_top: f32) -> Window {
        let scroll_top = if scroll_top.is_finite() { scroll_top.max(0.0) } else { 0.0 };
        let len = self.items.len();
        let start = match self.options.item_height {
            Some(h) => (scroll_top / h) as usize,
            None => self
                .positions
                .first_visible(scroll_top)
                .unwrap_or(self.positions.len()),
        }
        .min(len);
        let end = cmp::min(start.saturating_add(self.page_size), len);
        let offset = match self.options.item_height {
            Some(h) => start as f32 * h,
            None => self.positions.offset_of(start),
        };
        Window { start, end, offset }
    }

    fn request_next(&mut self) -> bool {
        if self.status != LoadStatus::Idle || self.loader.is_none() {
            return false;
        }
        if self.reissue {
            self.reissue = false;
        } else {
            self.page += 1;
        }
        self.set_status(LoadStatus::Loading);

        let request = PageRequest {
            page: self.page,
            page_size: self.page_size,
            generation: self.generation,
        };
        pdebug!(page = request.page, page_size = request.page_size, "request page");
        if let Some(loader) = self.loader.as_mut() {
            loader.request(request);
        }
        true
    }

    fn handle_scroll(&mut self) {
        let remaining = self.host.scroll_height() - self.host.scroll_top() - self.viewport_height;
        let near_bottom = remaining <= self.options.near_bottom;
        ptrace!(remaining, near_bottom, status = ?self.status, "scroll");

        if near_bottom && self.request_next() {
            return;
        }
        if self.status == LoadStatus::Exhausted {
            self.host.set_indicator(Indicator::End);
        }
        // Repaint ticks bypass the `Loading` gate in `render`: they must not settle a pending
        // load.
        if self.options.mode == Mode::Windowed {
            self.paint_window();
        }
    }

    fn append_rows(&mut self, from: usize) {
        let page = &self.items[from..];
        if page.is_empty() {
            return;
        }
        let render_item = Arc::clone(&self.options.render_item);
        let mut rows = Vec::with_capacity(page.len());
        for (i, item) in page.iter().enumerate() {
            let mut row = self.host.create_row(from + i);
            render_item(&mut row, item, i, page);
            rows.push(row);
        }
        self.host.append_rows(rows);
    }

    fn paint_window(&mut self) {
        let next = self.window_at(self.host.scroll_top());

        if self.window != Some(next) {
            let render_item = Arc::clone(&self.options.render_item);
            let slice = &self.items[next.start..next.end];
            let mut rows = Vec::with_capacity(slice.len());
            for (i, item) in slice.iter().enumerate() {
                let mut row = self.host.create_row(next.start + i);
                render_item(&mut row, item, i, slice);
                rows.push(row);
            }
            self.host.replace_rows(rows);
            self.host.set_translate(next.offset);
            self.window = Some(next);
            ptrace!(start = next.start, end = next.end, offset = next.offset, "paint_window");
        }

        match self.options.item_height {
            Some(h) => {
                if self.dirty {
                    let height = self.items.len() as f32 * h + self.options.slack;
                    self.host.set_content_height(height);
                }
            }
            None => {
                let unmeasured = next.end > self.positions.len();
                let range = next.start..next.end;
                if unmeasured && self.pending_layout.as_ref() != Some(&range) {
                    self.pending_layout = Some(range);
                    self.host.request_layout();
                }
            }
        }
        self.dirty = false;
    }
}

impl<T, H: Host + core::fmt::Debug> core::fmt::Debug for VirtualList<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("host", &self.host)
            .field("options", &self.options)
            .field("len", &self.items.len())
            .field("measured", &self.positions.len())
            .field("window", &self.window)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("status", &self.status)
            .field("generation", &self.generation)
            .field("viewport_height", &self.viewport_height)
            .finish_non_exhaustive()
    }
}

fn resolve_page_size(configured: usize, item_height: Option<f32>, viewport_height: f32) -> usize {
    if configured > 0 {
        return configured;
    }
    match item_height {
        Some(h) => ceil_ratio(viewport_height, h).saturating_add(1),
        None => 1,
    }
}

// `f32::ceil` needs `std`; viewport and item heights are non-negative, so truncation works.
// `as usize` saturates, so a tiny `unit` pins the result at `usize::MAX`.
fn ceil_ratio(value: f32, unit: f32) -> usize {
    let q = value / unit;
    let n = q as usize;
    if (n as f32) < q { n.saturating_add(1) } else { n }
}
