use std::sync::mpsc::{self, Receiver, Sender};

use pagelist::{ListOptions, PageRequest, PageStatus, Result, VirtualList};

use crate::{MemoryHost, PageSource};

/// A framework-neutral driver around a [`VirtualList`] mounted in a [`MemoryHost`].
///
/// Page loading is an explicit request/response pair: the list emits [`PageRequest`]s into a
/// channel, the adapter takes them with [`Controller::next_request`] and answers with
/// [`Controller::deliver`] whenever the data is ready. Adapters drive it by calling:
/// - `scroll_to` when the user scrolls,
/// - `frame(now_ms)` once per frame/timer tick (throttle trailing edge and layout pass).
#[derive(Debug)]
pub struct Controller<T> {
    list: VirtualList<T, MemoryHost>,
    requests: Receiver<PageRequest>,
    sender: Sender<PageRequest>,
}

impl<T> Controller<T> {
    pub fn new(host: MemoryHost, options: ListOptions<T, crate::MemoryRow>) -> Result<Self> {
        let (sender, requests) = mpsc::channel();
        Ok(Self {
            list: VirtualList::new(host, options)?,
            requests,
            sender,
        })
    }

    pub fn list(&self) -> &VirtualList<T, MemoryHost> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<T, MemoryHost> {
        &mut self.list
    }

    pub fn host(&self) -> &MemoryHost {
        self.list.host()
    }

    pub fn into_list(self) -> VirtualList<T, MemoryHost> {
        self.list
    }

    /// Registers the channel as the list's loader, which requests the first page.
    pub fn start(&mut self) {
        self.list.load(self.sender.clone());
    }

    /// Scrolls the host and forwards the scroll event. Returns the applied offset.
    pub fn scroll_to(&mut self, top: f32, now_ms: u64) -> f32 {
        let applied = self.list.host_mut().scroll_to(top);
        self.list.on_scroll(now_ms);
        applied
    }

    pub fn scroll_to_bottom(&mut self, now_ms: u64) -> f32 {
        self.scroll_to(f32::MAX, now_ms)
    }

    /// Runs one frame: releases a throttled scroll event, then commits layout and lets the
    /// list measure what it asked for.
    pub fn frame(&mut self, now_ms: u64) {
        self.list.tick(now_ms);
        if self.list.host_mut().layout() {
            self.list.on_layout();
        }
    }

    pub fn next_request(&self) -> Option<PageRequest> {
        self.requests.try_recv().ok()
    }

    /// Answers `request`. Returns `false` if the list no longer waits for it.
    pub fn deliver(&mut self, request: PageRequest, data: Vec<T>, status: PageStatus) -> bool {
        self.list.complete(request, data, status)
    }

    /// Answers every queued request from `source`. Returns how many were delivered.
    pub fn serve(&mut self, source: &mut impl PageSource<T>) -> usize {
        let mut delivered = 0;
        while let Some(request) = self.next_request() {
            let (data, status) = source.fetch(request);
            if self.deliver(request, data, status) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Activates the retry affordance of the error indicator.
    pub fn retry(&mut self) -> bool {
        self.list.retry()
    }

    pub fn reset(&mut self, clear_buffer: bool) {
        self.list.reset(clear_buffer);
        // Requests issued before the reset can never be delivered.
        while self.requests.try_recv().is_ok() {}
    }
}
