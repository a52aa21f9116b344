use crate::PageRequest;

/// Receives page requests from a [`crate::VirtualList`].
///
/// The list does not wait on the loader: the caller fetches asynchronously and answers with
/// [`crate::VirtualList::complete`] (or the ungated [`crate::VirtualList::render`]).
pub trait PageLoader {
    fn request(&mut self, request: PageRequest);
}

impl<F: FnMut(PageRequest)> PageLoader for F {
    fn request(&mut self, request: PageRequest) {
        self(request)
    }
}

/// Forwards requests over a channel, for hosts that run fetches on another thread.
///
/// A disconnected receiver drops the request; the list then stays in `Loading` until it is
/// cancelled or reset, like any loader that never answers.
#[cfg(feature = "std")]
impl PageLoader for std::sync::mpsc::Sender<PageRequest> {
    fn request(&mut self, request: PageRequest) {
        if self.send(request).is_err() {
            pwarn!(page = request.page, "PageLoader: receiver disconnected");
        }
    }
}
